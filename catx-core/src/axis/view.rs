use super::labels::{row_extents, row_offsets, rows_from_ticks, LabelRow};
use super::separators::{draw_group_separators, group_separator_coords};
use super::{coords_from_ticks, AxisBase, Coords, PaintError, TickCoords};
use crate::config::AxisConfig;
use crate::formatter::{CategoricalTickFormatter, TickFormatter};
use crate::range::FactorRange;
use crate::ticker::{CategoricalTicker, TickSet, Ticker};
use serde::Serialize;

/// Space taken outward from the axis line.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Extents {
    /// Length of major ticks outside the frame
    pub tick: f64,
    /// One measured extent per label row
    pub tick_labels: Vec<f64>,
}

impl Extents {
    /// Total extent of all label rows.
    pub fn tick_label(&self) -> f64 {
        self.tick_labels.iter().sum()
    }
}

/// Everything computed for one paint cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLayout {
    pub bounds: (f64, f64),
    pub tick_coords: TickCoords,
    pub rows: Vec<LabelRow>,
    pub extents: Extents,
    pub offsets: Vec<f64>,
    pub separators: Coords,
}

/// Paints a categorical axis for a factor range through an [`AxisBase`].
///
/// The view holds only shared read-only inputs; every call recomputes from
/// the base's current bounds.
pub struct CategoricalAxisView<'a> {
    range: &'a FactorRange,
    config: &'a AxisConfig,
    ticker: &'a dyn Ticker,
    formatter: &'a dyn TickFormatter,
}

impl<'a> CategoricalAxisView<'a> {
    pub fn new(range: &'a FactorRange, config: &'a AxisConfig) -> Self {
        Self {
            range,
            config,
            ticker: &CategoricalTicker,
            formatter: &CategoricalTickFormatter,
        }
    }

    pub fn with_ticker(mut self, ticker: &'a dyn Ticker) -> Self {
        self.ticker = ticker;
        self
    }

    pub fn with_formatter(mut self, formatter: &'a dyn TickFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    fn ticks<B: AxisBase + ?Sized>(&self, base: &B) -> TickSet {
        let (start, end) = base.computed_bounds();
        self.ticker.get_ticks(start, end, self.range, base.loc())
    }

    pub fn tick_coords<B: AxisBase + ?Sized>(&self, base: &B) -> TickCoords {
        coords_from_ticks(&self.ticks(base), self.range.levels(), base.loc(), base.dimension())
    }

    fn rows_at<B: AxisBase + ?Sized>(&self, base: &B, tick_coords: &TickCoords) -> Vec<LabelRow> {
        rows_from_ticks(self.range.levels(), &self.ticks(base), tick_coords, self.formatter, self.config)
    }

    pub fn label_rows<B: AxisBase + ?Sized>(&self, base: &B) -> Vec<LabelRow> {
        let coords = self.tick_coords(base);
        self.rows_at(base, &coords)
    }

    pub fn extents<B: AxisBase + ?Sized>(&self, base: &B, rows: &[LabelRow]) -> Result<Extents, PaintError> {
        Ok(Extents {
            tick: self.config.major_tick_out,
            tick_labels: row_extents(base, rows, self.config.major_label_standoff)?,
        })
    }

    /// Compute the full layout without drawing.
    pub fn layout<B: AxisBase + ?Sized>(&self, base: &B) -> Result<AxisLayout, PaintError> {
        let (start, end) = base.computed_bounds();
        let tick_coords = self.tick_coords(base);
        let rows = self.rows_at(base, &tick_coords);
        let extents = self.extents(base, &rows)?;
        let offsets = row_offsets(extents.tick, self.config.major_label_standoff, &extents.tick_labels);
        let separators = if self.config.separator_line.visible {
            group_separator_coords(self.range, start, end, base.loc(), base.dimension())
        } else {
            [Vec::new(), Vec::new()]
        };

        Ok(AxisLayout { bounds: (start, end), tick_coords, rows, extents, offsets, separators })
    }

    /// Draw separators, then each label row outward from the axis line.
    pub fn paint<B: AxisBase + ?Sized>(
        &self,
        base: &mut B,
        extents: &Extents,
        tick_coords: &TickCoords,
    ) -> Result<(), PaintError> {
        let separators = draw_group_separators(base, self.range, &self.config.separator_line, extents.tick_label())?;
        log::debug!("Drew {} group separator(s)", separators);

        let rows = self.rows_at(&*base, tick_coords);
        let offsets = row_offsets(extents.tick, self.config.major_label_standoff, &extents.tick_labels);
        for (row, standoff) in rows.iter().zip(offsets) {
            log::trace!("Drawing {:?} row: {} label(s) at standoff {:.2}", row.kind, row.labels.len(), standoff);
            base.draw_oriented_labels(&row.labels, &row.coords, row.orientation, standoff, &row.visuals)?;
        }
        Ok(())
    }

    /// Run a whole paint cycle: rule, major ticks, separators and labels.
    pub fn render<B: AxisBase + ?Sized>(&self, base: &mut B) -> Result<AxisLayout, PaintError> {
        let layout = self.layout(&*base)?;
        log::debug!(
            "Rendering categorical axis: {} row(s), extents {:?}, bounds {:?}",
            layout.rows.len(),
            layout.extents.tick_labels,
            layout.bounds
        );

        if self.config.axis_line.visible {
            base.draw_rule(&self.config.axis_line)?;
        }
        if self.config.major_tick_line.visible && !layout.tick_coords.major[0].is_empty() {
            base.draw_ticks(
                &layout.tick_coords.major,
                self.config.major_tick_in,
                self.config.major_tick_out,
                &self.config.major_tick_line,
            )?;
        }

        self.paint(base, &layout.extents, &layout.tick_coords)?;
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::testing::{Call, Primitive, RecordingBase};
    use crate::axis::{Label, Size, TextBox};
    use crate::factor::Factor;
    use crate::ticker::Tick;
    use crate::visuals::LineVisuals;

    fn label_calls(base: &RecordingBase) -> Vec<(Vec<String>, f64)> {
        base.calls
            .iter()
            .filter_map(|c| match c {
                Call::Labels { texts, standoff, .. } => Some((texts.clone(), *standoff)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_paint_one_level() {
        let range = FactorRange::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();
        let config = AxisConfig::default();
        let view = CategoricalAxisView::new(&range, &config);
        let mut base = RecordingBase::new(range.start(), range.end());

        let layout = view.render(&mut base).unwrap();
        assert_eq!(layout.rows.len(), 1);
        assert!(layout.separators[0].is_empty());
        let labels = label_calls(&base);
        assert_eq!(labels, vec![(vec!["a".to_string(), "b".to_string(), "c".to_string()], 11.0)]);
        assert!(!base.calls.iter().any(|c| matches!(c, Call::Ticks { tin, .. } if *tin == -3.0)));
    }

    #[test]
    fn test_paint_two_levels_separator_before_labels() {
        let range = FactorRange::new(vec![("g1", "a").into(), ("g1", "b").into(), ("g2", "c").into()]).unwrap();
        let config = AxisConfig::default();
        let view = CategoricalAxisView::new(&range, &config);
        let mut base = RecordingBase::new(range.start(), range.end());
        let tick_coords = view.tick_coords(&base);
        let rows = view.label_rows(&base);
        let extents = view.extents(&base, &rows).unwrap();

        view.paint(&mut base, &extents, &tick_coords).unwrap();

        assert!(matches!(base.calls[0], Call::Ticks { tin, .. } if tin == -3.0));
        let labels = label_calls(&base);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].1, 11.0);
        assert_eq!(labels[1].1, 11.0 + extents.tick_labels[0]);
        assert_eq!(labels[1].0, vec!["g1".to_string(), "g2".to_string()]);
    }

    #[test]
    fn test_painter_offsets_match_layout() {
        let range = FactorRange::new(vec![
            ("g1", "s1", "a").into(),
            ("g1", "s2", "bb").into(),
            ("g2", "s1", "ccc").into(),
        ])
        .unwrap();
        let config = AxisConfig::default();
        let view = CategoricalAxisView::new(&range, &config);
        let mut base = RecordingBase::new(range.start(), range.end());

        let layout = view.render(&mut base).unwrap();
        let standoffs: Vec<f64> = label_calls(&base).into_iter().map(|(_, s)| s).collect();
        assert_eq!(standoffs, layout.offsets);
        assert_eq!(layout.offsets.len(), 3);
    }

    #[test]
    fn test_render_is_idempotent() {
        let range = FactorRange::new(vec![("g1", "a").into(), ("g2", "b").into()]).unwrap();
        let config = AxisConfig::default();
        let view = CategoricalAxisView::new(&range, &config);
        let mut first = RecordingBase::new(range.start(), range.end());
        let mut second = RecordingBase::new(range.start(), range.end());
        view.render(&mut first).unwrap();
        view.render(&mut second).unwrap();
        assert_eq!(first.calls, second.calls);
    }

    #[test]
    fn test_hidden_lines_skip_rule_and_ticks() {
        let range = FactorRange::new(vec!["a".into()]).unwrap();
        let config = AxisConfig {
            axis_line: LineVisuals::default().hidden(),
            major_tick_line: LineVisuals::default().hidden(),
            ..AxisConfig::default()
        };
        let view = CategoricalAxisView::new(&range, &config);
        let mut base = RecordingBase::new(range.start(), range.end());
        view.render(&mut base).unwrap();
        assert!(base.calls.iter().all(|c| matches!(c, Call::Labels { .. })));
    }

    #[test]
    fn test_measurement_failure_stops_render() {
        let range = FactorRange::new(vec!["a".into(), "b".into()]).unwrap();
        let config = AxisConfig::default();
        let view = CategoricalAxisView::new(&range, &config);
        let mut base = RecordingBase::new(range.start(), range.end());
        base.fail_on = Some("b".to_string());
        assert!(view.render(&mut base).is_err());
        assert!(base.calls.is_empty());
    }

    #[test]
    fn test_separator_draw_failure_reaches_caller() {
        let range = FactorRange::new(vec![("g1", "a").into(), ("g1", "b").into(), ("g2", "c").into()]).unwrap();
        let config = AxisConfig::default();
        let view = CategoricalAxisView::new(&range, &config);
        let mut base = RecordingBase::new(range.start(), range.end());
        let tick_coords = view.tick_coords(&base);
        let rows = view.label_rows(&base);
        let extents = view.extents(&base, &rows).unwrap();
        base.fail_draw = Some(Primitive::Ticks);

        let err = view.paint(&mut base, &extents, &tick_coords).unwrap_err();
        assert_eq!(err, PaintError::surface("Ticks refused"));
        assert!(label_calls(&base).is_empty());
    }

    #[test]
    fn test_label_draw_failure_stops_remaining_rows() {
        let range = FactorRange::new(vec![
            ("g1", "s1", "a").into(),
            ("g1", "s2", "b").into(),
            ("g2", "s1", "c").into(),
        ])
        .unwrap();
        let config = AxisConfig::default();
        let view = CategoricalAxisView::new(&range, &config);
        let mut base = RecordingBase::new(range.start(), range.end());
        base.fail_draw = Some(Primitive::Labels);

        let err = view.render(&mut base).unwrap_err();
        assert_eq!(err, PaintError::surface("Labels refused"));
        assert_eq!(base.refused, 1);
        assert!(label_calls(&base).is_empty());
        assert!(base.calls.contains(&Call::Rule));
    }

    #[test]
    fn test_rule_failure_draws_nothing_else() {
        let range = FactorRange::new(vec!["a".into(), "b".into()]).unwrap();
        let config = AxisConfig::default();
        let view = CategoricalAxisView::new(&range, &config);
        let mut base = RecordingBase::new(range.start(), range.end());
        base.fail_draw = Some(Primitive::Rule);

        assert!(matches!(view.render(&mut base), Err(PaintError::Surface(_))));
        assert!(base.calls.is_empty());
    }

    #[test]
    fn test_injected_formatter_changes_major_row_only() {
        let range = FactorRange::new(vec![("g1", "a").into(), ("g1", "b").into(), ("g2", "c").into()]).unwrap();
        let config = AxisConfig::default();
        let upper = |ticks: &[String]| -> Vec<Label> {
            ticks.iter().map(|t| Label::Text(t.to_uppercase())).collect()
        };
        let view = CategoricalAxisView::new(&range, &config).with_formatter(&upper);
        let mut base = RecordingBase::new(range.start(), range.end());

        view.render(&mut base).unwrap();
        let labels = label_calls(&base);
        assert_eq!(labels[0].0, vec!["A".to_string(), "B".to_string(), "C".to_string()]);
        assert_eq!(labels[1].0, vec!["g1".to_string(), "g2".to_string()]);
    }

    #[test]
    fn test_prebuilt_labels_keep_their_size() {
        let range = FactorRange::new(vec!["a".into(), "b".into()]).unwrap();
        let config = AxisConfig::default();
        let boxed = |ticks: &[String]| -> Vec<Label> {
            ticks.iter().map(|t| Label::Prebuilt(TextBox::sized(t.as_str(), Size::new(4.0, 30.0)))).collect()
        };
        let view = CategoricalAxisView::new(&range, &config).with_formatter(&boxed);
        let base = RecordingBase::new(range.start(), range.end());

        let layout = view.layout(&base).unwrap();
        assert_eq!(layout.extents.tick_labels, vec![30.0 + config.major_label_standoff]);
    }

    struct FirstFactorOnly;

    impl Ticker for FirstFactorOnly {
        fn get_ticks(&self, _start: f64, _end: f64, range: &FactorRange, _loc: f64) -> TickSet {
            let mut ticks = TickSet::default();
            if let Some(factor) = range.factors().first() {
                let position = range.synthetic(factor).unwrap_or(0.0);
                ticks.major.push(Tick { factor: factor.clone(), position });
                let top = Factor::L1(factor.top().to_string());
                let position = range.synthetic(&top).unwrap_or(0.0);
                ticks.tops.push(Tick { factor: top, position });
            }
            ticks
        }
    }

    #[test]
    fn test_injected_ticker_drives_rows() {
        let range = FactorRange::new(vec![("g1", "a").into(), ("g1", "b").into(), ("g2", "c").into()]).unwrap();
        let config = AxisConfig::default();
        let view = CategoricalAxisView::new(&range, &config).with_ticker(&FirstFactorOnly);
        let base = RecordingBase::new(range.start(), range.end());

        let rows = view.label_rows(&base);
        assert_eq!(rows[0].labels.texts(), vec!["a"]);
        assert_eq!(rows[1].labels.texts(), vec!["g1"]);
        assert_eq!(view.tick_coords(&base).major[0], vec![0.5]);
    }
}
