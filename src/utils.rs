//! Internal logging helpers. Everything in here compiles to nothing unless the `log` feature is on.

/// Evaluates `$body`, logging the time it took under `$name` at trace level.
macro_rules! timed {
	($name:expr, $body:expr) => {{
		#[cfg(feature = "log")]
		let timer = std::time::Instant::now();

		let result = $body;

		#[cfg(feature = "log")]
		log::trace!("{} took {:?}", $name, timer.elapsed());

		result
	}};
}

/// Forwards to `log::debug!` if the `log` feature is enabled.
macro_rules! debug {
	($($arg:tt)+) => {{
		#[cfg(feature = "log")]
		log::debug!($($arg)+);
	}};
}

pub(crate) use {debug, timed};
