//! Macros for building and returning trace errors

/// Build a [`TraceError`](crate::TraceError) from any mix of arguments
///
/// ```
/// use serde_json::json;
/// use trace_error::trace_error;
///
/// let inner = trace_error!("Test error", json!({"error": "test"}));
/// let outer = trace_error!("Captured", json!({"test": 5}), inner);
/// assert_eq!(outer.message(), "Captured");
/// assert_eq!(outer.messages().len(), 4);
/// ```
///
/// Prefix the arguments with `Kind =>` to build a specific kind.
#[macro_export]
macro_rules! trace_error {
    () => {
        $crate::TraceError::default()
    };
    ($kind:expr => $($arg:expr),* $(,)?) => {
        {
            let args: ::std::vec::Vec<$crate::Arg> = ::std::vec![$($crate::Arg::from($arg)),*];
            $crate::TraceError::with_kind($kind, args)
        }
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::TraceError::new(::std::vec![$($crate::Arg::from($arg)),+])
    };
}

/// Return early with a [`TraceError`](crate::TraceError)
#[doc(hidden)]
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return ::std::result::Result::Err($crate::trace_error!($($arg)*).into())
    };
}

/// Return early with a [`TraceError`](crate::TraceError) unless a
/// condition holds
#[doc(hidden)]
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::bail!($($arg)+);
        }
    };
}
