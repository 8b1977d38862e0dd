use crate::axis::labels::Label;

/// Turns innermost factor labels into drawable labels.
pub trait TickFormatter {
    fn format(&self, ticks: &[String]) -> Vec<Label>;
}

/// Passes factor labels through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoricalTickFormatter;

impl TickFormatter for CategoricalTickFormatter {
    fn format(&self, ticks: &[String]) -> Vec<Label> {
        ticks.iter().cloned().map(Label::Text).collect()
    }
}

impl<F> TickFormatter for F
where
    F: Fn(&[String]) -> Vec<Label>,
{
    fn format(&self, ticks: &[String]) -> Vec<Label> {
        self(ticks)
    }
}
