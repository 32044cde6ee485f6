/// Installs the `fern`-based console and file logger.
pub mod loggerlocal;
