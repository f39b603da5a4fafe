//! Python wrapper types for the MAINTAINERS parser.

use maintainers_core::{Maintainer, Maintainers};
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pythonize::pythonize;

/// A single maintainer.
#[pyclass(name = "Maintainer", module = "maintainers", frozen, eq, hash)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PyMaintainer {
    inner: Maintainer,
}

impl From<Maintainer> for PyMaintainer {
    fn from(inner: Maintainer) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyMaintainer {
    #[new]
    #[pyo3(signature = (name=None, login=None, email=None))]
    fn new(name: Option<String>, login: Option<String>, email: Option<String>) -> Self {
        Maintainer::new(name, login, email).into()
    }

    #[getter]
    fn name(&self) -> Option<&str> {
        self.inner.name()
    }

    #[getter]
    fn login(&self) -> Option<&str> {
        self.inner.login()
    }

    #[getter]
    fn email(&self) -> Option<&str> {
        self.inner.email()
    }

    /// JSON representation of this maintainer.
    fn json(&self) -> PyResult<String> {
        self.inner
            .to_json_string()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Dictionary with the keys `name`, `login` and `email`.
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyAny>> {
        pythonize(py, &self.inner).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        self.inner.repr()
    }
}

/// A bunch of maintainers, in file order.
#[pyclass(name = "Maintainers", module = "maintainers")]
#[derive(Debug, Clone, Default)]
pub struct PyMaintainers {
    inner: Maintainers,
}

impl From<Maintainers> for PyMaintainers {
    fn from(inner: Maintainers) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyMaintainers {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Appends a maintainer.
    fn append(&mut self, maintainer: PyRef<'_, PyMaintainer>) {
        self.inner.push(maintainer.inner.clone());
    }

    /// Notes if a maintainer with the same fields is in the list.
    fn is_maintainer(&self, instance: PyRef<'_, PyMaintainer>) -> bool {
        self.inner.is_maintainer(&instance.inner)
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __getitem__(&self, index: isize) -> PyResult<PyMaintainer> {
        let len = self.inner.len() as isize;
        let resolved = if index < 0 { index + len } else { index };
        usize::try_from(resolved)
            .ok()
            .and_then(|i| self.inner.get(i))
            .cloned()
            .map(PyMaintainer::from)
            .ok_or_else(|| PyIndexError::new_err("maintainer index out of range"))
    }

    fn __iter__(&self) -> PyMaintainersIter {
        PyMaintainersIter {
            inner: self.inner.clone().into_iter(),
        }
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        self.inner.repr()
    }
}

/// Iterator over a snapshot of a `Maintainers` list.
#[pyclass(module = "maintainers")]
pub struct PyMaintainersIter {
    inner: std::vec::IntoIter<Maintainer>,
}

#[pymethods]
impl PyMaintainersIter {
    fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    fn __next__(mut slf: PyRefMut<'_, Self>) -> Option<PyMaintainer> {
        slf.inner.next().map(PyMaintainer::from)
    }
}
