//! Wrapper-class emitter — the Python-visible `DeviceParameters` class.
//!
//! Every generated method carries a `_SUBSTITUTE_DOCSTRING_FOR_` placeholder
//! keyed by the fully qualified native signature; a downstream pass replaces
//! the placeholders with documentation extracted from the headers. Keeping
//! doc association out of this emitter means output shape never depends on
//! comment layout.

use crate::casing::snake_case;
use crate::emit::BANNER;
use crate::model::{is_primitive_type, Accessor, Event, NATIVE_CLASS};

/// Build directives; Cython requires them on the very first lines.
const DIRECTIVES: [&str; 3] = ["# distutils: language=c++", "# cython: language_level=3", ""];

/// Cimports and the class opening, below the banner.
const CLASS_HEAD: [&str; 8] = [
    "",
    "from libcpp.string cimport string",
    "from libcpp.vector cimport vector",
    "from libcpp cimport bool",
    "from cython cimport view",
    "",
    "cdef class DeviceParameters:",
    "",
];

/// Hand-authored wrapper body spliced in at the class-opening trigger:
/// lifecycle methods plus the generic parameter accessors that are not
/// derivable from the header.
const WRAPPER_PREAMBLE: [&str; 73] = [
    "",
    "    cdef cpp.DeviceParameters*  c_obj",
    "",
    "    def __cinit__(self, device_info_or_address, service='7683'):",
    "        if isinstance(device_info_or_address, DeviceInfo):",
    "            self.c_obj = new cpp.DeviceParameters((<DeviceInfo> device_info_or_address).c_obj)",
    "        else:",
    "            self.c_obj = new cpp.DeviceParameters(",
    "                    device_info_or_address.encode(),",
    "                    service.encode()",
    "                )",
    "",
    "    def __init__(self, device_info_or_address, service='7683'):",
    "        '''",
    "Connects to parameter server of a Nerian stereo device, either by using a",
    "discovered DeviceInfo (see DeviceEnumeration) or an address and optional port.",
    "        '''",
    "        pass",
    "",
    "    def __dealloc__(self):",
    "        del self.c_obj",
    "",
    "    def get_parameter_set(self):",
    "        '''",
    "Returns a copy of the currently active ParameterSet (works like dict from",
    "parameter UID to Parameter objects). Contents are not updated in this copy",
    "if parameters are modified by the server. For setting parameters, please",
    "use set_parameter() exclusively.",
    "        '''",
    "        ps = ParameterSet()",
    "        ps.c_obj = self.c_obj.getParameterSet()",
    "        return ps",
    "",
    "    def has_parameter(self, uid):",
    "        '''",
    "        Tests whether a specific named parameter is available for this device.",
    "        '''",
    "        return self.c_obj.hasParameter(uid.encode('utf-8'))",
    "",
    "    def get_parameter(self, uid):",
    "        '''",
    "Returns a Parameter object for the named device parameter. An",
    "exception is raised for invalid or inaccessible parameter names.",
    "",
    "The returned object is a detached copy of the internal parameter at invocation",
    "time; it is not updated when the device sends a new value or metadata.",
    "Likewise, any modifications must be requested using set_parameter() or the",
    "various parameter-specific setters.",
    "        '''",
    "        return wrap_python_parameter(self.c_obj.getParameter(uid.encode('utf-8')))",
    "",
    "    def set_parameter(self, uid, value):",
    "        '''",
    "Attempts to set a parameter on the device, given a parameter UID string",
    "and a new value, which is typecast automatically. Raises an exception",
    "if the operation failed.",
    "        '''",
    "        self.c_obj.setParameter(uid.encode('utf-8'), str(value).encode('utf-8'))",
    "",
    "    def reboot(self):",
    "        '''",
    "Remotely triggers a reboot of the device",
    "        '''",
    "        self.c_obj.setParameter('reboot'.encode('utf-8'), '1'.encode('utf-8'))",
    "",
    "    def trigger_now(self):",
    "        '''",
    "Emit a software trigger event to perform a single acquisition.",
    "This only has effect when the External Trigger mode is set to Software.",
    "        '''",
    "        self.c_obj.setParameter('trigger_now'.encode('utf-8'), '1'.encode('utf-8'))",
    "",
    "",
];

/// Serialize the wrapper-class buffer for an event stream.
pub fn emit(events: &[Event]) -> String {
    let mut lines: Vec<String> = DIRECTIVES
        .into_iter()
        .chain(BANNER)
        .chain(CLASS_HEAD)
        .map(str::to_string)
        .collect();

    let mut spliced = false;
    for event in events {
        match event {
            Event::ClassOpen => {
                lines.push(format!(
                    "    _SUBSTITUTE_DOCSTRING_FOR_(\"{}\")",
                    NATIVE_CLASS
                ));
                // The hand-authored block goes in once, at the first trigger.
                if !spliced {
                    lines.extend(WRAPPER_PREAMBLE.iter().map(|l| l.to_string()));
                    spliced = true;
                }
            }
            Event::Accessor(accessor) => {
                if accessor.name.starts_with("set") {
                    emit_mutator(&mut lines, accessor);
                } else {
                    emit_accessor(&mut lines, accessor);
                }
            }
        }
    }

    lines.join("\n")
}

fn def_line(snake: &str, params: &str) -> String {
    if params.is_empty() {
        format!("    def {}(self):", snake)
    } else {
        format!("    def {}(self, {}):", snake, params)
    }
}

fn placeholder_line(accessor: &Accessor) -> String {
    format!(
        "        _SUBSTITUTE_DOCSTRING_FOR_(\"{}\")",
        accessor.qualified_ref()
    )
}

/// Names of all named arguments, defaults stripped, in declaration order.
fn call_args(accessor: &Accessor) -> String {
    accessor
        .params
        .iter()
        .filter_map(|p| p.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Mutator: same signature as the native call (defaults kept), forwarding
/// body, no return value.
fn emit_mutator(lines: &mut Vec<String>, accessor: &Accessor) {
    let signature = accessor
        .params
        .iter()
        .map(|p| match p.name_with_default.as_deref() {
            Some(name) => format!("{} {}", p.cython_type(), name),
            None => p.cython_type(),
        })
        .collect::<Vec<_>>()
        .join(", ");

    lines.push(def_line(&snake_case(&accessor.name), &signature));
    lines.push(placeholder_line(accessor));
    lines.push(format!(
        "        self.c_obj.{}({})",
        accessor.name,
        call_args(accessor)
    ));
    lines.push(String::new());
}

fn emit_accessor(lines: &mut Vec<String>, accessor: &Accessor) {
    let snake = snake_case(&accessor.name);
    let args = call_args(accessor);

    if accessor.params.iter().any(|p| p.is_reference()) {
        // The native call writes into caller-supplied out-parameters: bind
        // locals (zero-initialized unless the header gives a default), call,
        // and return the bindings as a tuple in declaration order.
        lines.push(def_line(&snake, ""));
        lines.push(placeholder_line(accessor));
        for param in &accessor.params {
            let Some(name) = param.name_with_default.as_deref() else {
                continue;
            };
            let binding_type = param.cython_type().replace('&', "");
            let binding = if name.find('=').is_some_and(|i| i > 0) {
                name.to_string()
            } else {
                format!("{} = 0", name)
            };
            lines.push(format!("        cdef {} {}", binding_type, binding));
        }
        lines.push(format!("        self.c_obj.{}({})", accessor.name, args));
        lines.push(format!("        return {}", args));
    } else {
        // Plain accessor: single-expression body returning the native result,
        // wrapped in the Python-level class constructor for composite types.
        let with_defaults = accessor
            .params
            .iter()
            .filter_map(|p| p.name_with_default.as_deref())
            .collect::<Vec<_>>()
            .join(", ");

        lines.push(def_line(&snake, &with_defaults));
        lines.push(placeholder_line(accessor));
        let call = format!("self.c_obj.{}({})", accessor.name, args);
        if is_primitive_type(&accessor.return_type) {
            lines.push(format!("        return {}", call));
        } else {
            lines.push(format!("        return {}({})", accessor.return_type, call));
        }
    }

    lines.push(String::new());
}
