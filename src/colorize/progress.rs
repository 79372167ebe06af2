use super::Colorizers;

const FILLED: char = '\u{25a0}';
const EMPTY: char = '\u{25ab}';

impl Colorizers {
    /// `width` slots filled proportionally to `fraction` (0..=1), followed by
    /// the colored percentage. Out-of-range fractions are shown as given but
    /// the bar never under- or overflows.
    pub fn progress_bar(&self, fraction: f64, width: usize) -> String {
        let filled = if fraction.is_nan() {
            0
        } else {
            ((fraction * width as f64).floor().max(0.0) as usize).min(width)
        };
        let mut bar: String = std::iter::repeat(FILLED).take(filled).collect();
        bar.extend(std::iter::repeat(EMPTY).take(width - filled));
        bar.push(' ');
        bar.push_str(&self.percentage(fraction, self.config.format.float_precision));
        bar
    }
}
