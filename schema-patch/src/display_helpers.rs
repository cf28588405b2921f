use std::fmt;
use std::fmt::Display;

/// Displays a list of alternatives as `A`, `A or B`, or `A, B or C`.
pub(crate) struct DisplayAlternatives<'a, T>(pub(crate) &'a [T]);

impl<T: Display> Display for DisplayAlternatives<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            [] => write!(f, "nothing"),
            [single] => write!(f, "{single}"),
            [init @ .., last] => {
                let mut iter = init.iter();
                if let Some(item) = iter.next() {
                    write!(f, "{item}")?;
                }
                iter.try_for_each(|item| write!(f, ", {item}"))?;
                write!(f, " or {last}")
            }
        }
    }
}

/// Displays an optional textual value, quoting it when present.
pub(crate) struct DisplayOption<'a>(pub(crate) &'a Option<String>);

impl Display for DisplayOption<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value:?}"),
            None => write!(f, "nothing"),
        }
    }
}
