/// Generate a frozen `#[pyclass]` struct where each field is `f64`.
///
/// Also generates a `from_scores()` method that copies values from the
/// corresponding Rust score record.
macro_rules! define_score_result {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident from $core_type:ty {
            $($field:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[pyo3::pyclass(frozen)]
        $vis struct $name {
            $(
                #[pyo3(get)]
                pub $field: f64,
            )+
        }

        impl $name {
            pub fn from_scores(s: &$core_type) -> Self {
                Self {
                    $(
                        $field: s.$field,
                    )+
                }
            }
        }
    };
}

/// Convert a score record into a `PyDict` keyed by its display labels
/// (`MFM`, `exp(-NMAEp)`, `NSE`, ...).
macro_rules! scores_to_dict {
    ($py:expr, $record:expr, $core_type:ty) => {{
        let dict = pyo3::types::PyDict::new($py);
        for (label, value) in <$core_type>::labels().iter().zip($record.values()) {
            dict.set_item(*label, value)?;
        }
        dict
    }};
}
