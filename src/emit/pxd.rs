//! Interface-declaration emitter — the `cdef extern` block Cython compiles
//! the native calls against.

use crate::emit::BANNER;
use crate::model::{Accessor, Event};

/// Hand-written head of the extern block: the constructors and the generic
/// parameter methods that are not autogenerated.
const EXTERN_BLOCK: [&str; 9] = [
    "",
    "cdef extern from \"visiontransfer/deviceparameters.h\" namespace \"visiontransfer\":",
    "    cdef cppclass DeviceParameters:",
    "        DeviceParameters(const DeviceInfo &) except +",
    "        DeviceParameters(const char* address, const char* service) except +",
    "        ParameterSet getParameterSet() except +",
    "        bool hasParameter(const string& uid) except +",
    "        Parameter getParameter(const string& uid) except +",
    "        void setParameter(const string& uid, string value) except +",
];

/// Serialize the interface-declaration buffer for an event stream.
pub fn emit(events: &[Event]) -> String {
    let mut lines: Vec<String> = std::iter::once("")
        .chain(BANNER)
        .chain(EXTERN_BLOCK)
        .map(str::to_string)
        .collect();

    for event in events {
        if let Event::Accessor(accessor) = event {
            lines.push(declaration_line(accessor));
        }
    }

    lines.join("\n")
}

/// One `type name` pair per named argument, defaults stripped — the extern
/// declaration describes only types. The `except +` marker lets native call
/// failures surface as Python exceptions.
fn declaration_line(accessor: &Accessor) -> String {
    let args = accessor
        .params
        .iter()
        .filter_map(|p| p.name().map(|name| format!("{} {}", p.ctype, name)))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "        {} {} ({}) except +",
        accessor.return_type, accessor.name, args
    )
}
