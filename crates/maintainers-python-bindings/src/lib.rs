//! Python bindings for the MAINTAINERS parser.
//!
//! This crate provides Python bindings using PyO3 for the maintainers-core library.

use maintainers_core::ParseError;
use pyo3::create_exception;
use pyo3::exceptions::PyException;
use pyo3::prelude::*;
use std::path::PathBuf;

mod types;

use types::{PyMaintainer, PyMaintainers, PyMaintainersIter};

create_exception!(
    maintainers,
    MalformedMaintainerError,
    PyException,
    "Raised when a maintainer can not be parsed."
);

fn to_py_err(error: ParseError) -> PyErr {
    match error {
        ParseError::Malformed { path, line, .. } => {
            MalformedMaintainerError::new_err((path.display().to_string(), line))
        }
        ParseError::Io(e) => PyErr::from(e),
    }
}

/// Parse a MAINTAINERS file and return the maintainers it lists.
///
/// Args:
///     file_path: Path to the MAINTAINERS file.
///     ignore_errors: If malformed lines should be skipped instead of raising.
///
/// Returns:
///     A `Maintainers` list, one entry per line in file order.
///
/// Raises:
///     MalformedMaintainerError: A line matched no layout and `ignore_errors` is false.
///         `args` holds the file path and the offending line.
///     OSError: The file could not be opened or read.
///
/// Example:
///     >>> maintainers = parse("MAINTAINERS")
///     >>> maintainers.is_maintainer(Maintainer(login="octocat"))
///     True
#[pyfunction]
#[pyo3(signature = (file_path, ignore_errors=false))]
fn parse(file_path: PathBuf, ignore_errors: bool) -> PyResult<PyMaintainers> {
    maintainers_core::parse(&file_path, ignore_errors)
        .map(PyMaintainers::from)
        .map_err(to_py_err)
}

/// The Python module for maintainers.
#[pymodule]
fn maintainers(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Route `log` records from the core library into Python's `logging`.
    // A logger may already be installed when the module is imported twice.
    let _ = pyo3_log::try_init();

    m.add_class::<PyMaintainer>()?;
    m.add_class::<PyMaintainers>()?;
    m.add_class::<PyMaintainersIter>()?;
    m.add(
        "MalformedMaintainerError",
        m.py().get_type::<MalformedMaintainerError>(),
    )?;
    m.add_function(wrap_pyfunction!(parse, m)?)?;

    // Add version info
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
