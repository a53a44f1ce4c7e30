//! Header line scanner — a doc-comment flag crossed with a brace-depth
//! counter.
//!
//! Mirrors the scan loop of the `autogen_parameters.py` helper rule-by-rule
//! so the regenerated files come out byte-identical. This is deliberately not
//! a C++ parser: depth tracking counts `{`/`}` characters textually on every
//! line, so braces inside string literals or stray comments corrupt the
//! count; a `/** … */` block opened and closed on the same line leaves the
//! scanner in comment mode; declarations split across lines are invisible.
//! Headers outside the small inline-accessor dialect are unsupported input.

use crate::model::{parse_args, Accessor, Event};
use regex::Regex;
use std::sync::LazyLock;

/// Return type, method name and raw argument text of an inline declaration.
static RE_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)\s+([^\s(]+)\s*\(([^)]*)\)").unwrap());

/// Opening line of the class body the wrapper is generated for.
const CLASS_OPEN: &str = " DeviceParameters {";

#[derive(Default)]
struct ScanState {
    /// Brace-nesting depth; 1 = namespace scope, 2 = class body.
    depth: i32,
    in_comment: bool,
    /// Accumulated text of the doc comment preceding the current position.
    doc: String,
    events: Vec<Event>,
}

/// Scan a header source and return the ordered event stream for the emitters.
pub fn scan(input: &str) -> Vec<Event> {
    let mut state = ScanState::default();
    for raw in input.lines() {
        process_line(&mut state, raw.trim());
    }
    state.events
}

fn process_line(s: &mut ScanState, line: &str) {
    if s.in_comment {
        // Accumulate further fragments for the pending doc comment.
        let (text, closed) = match line.find("*/") {
            Some(end) => (&line[..end], true),
            None => (line, false),
        };
        let fragment = text.trim_start_matches('*').trim();
        if !fragment.is_empty() {
            s.doc.push('\n');
            s.doc.push_str(fragment);
        }
        if closed {
            s.in_comment = false;
        }
    } else if let Some(start) = line.find("/**") {
        s.in_comment = true;
        s.doc = line[start + 3..].to_string();
    } else if s.depth == 1 && line.contains(CLASS_OPEN) {
        s.events.push(Event::ClassOpen);
        s.doc.clear();
    } else if s.depth == 2 && is_accessor_line(line) {
        let doc = match std::mem::take(&mut s.doc) {
            d if d.is_empty() => None,
            d => Some(d),
        };
        match parse_declaration(line, doc) {
            Some(accessor) => s.events.push(Event::Accessor(accessor)),
            None => eprintln!("warning: skipping unparseable accessor line: {}", line),
        }
    }

    // Depth updates unconditionally, whichever branch fired above.
    s.depth += brace_delta(line);
}

/// Recognition rule for an inline accessor: a parameter-list opener, a body
/// opener past the first column, and `get` or `set` past the first column.
/// The parameter-specific accessors are all defined inline; the generic
/// methods are declared without a body and fall through here.
fn is_accessor_line(line: &str) -> bool {
    line.contains('(')
        && line.find('{').is_some_and(|i| i > 0)
        && (line.find("get").is_some_and(|i| i > 0) || line.find("set").is_some_and(|i| i > 0))
}

fn parse_declaration(line: &str, doc: Option<String>) -> Option<Accessor> {
    let caps = RE_DECL.captures(line)?;
    Some(Accessor {
        return_type: caps[1].to_string(),
        name: caps[2].to_string(),
        params: parse_args(&caps[3]),
        doc,
    })
}

fn brace_delta(line: &str) -> i32 {
    let opens = line.matches('{').count() as i32;
    let closes = line.matches('}').count() as i32;
    opens - closes
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"
namespace visiontransfer {

/**
 * Configuration of device parameters.
 */
class VT_EXPORT DeviceParameters {
public:
    DeviceParameters(const DeviceInfo& device);

    ParameterSet getParameterSet();

    /**
     * Operation mode of the device.
     */
    int getOperationMode() { return readIntParameter("operation_mode"); }

    void setOperationMode(int mode) { writeIntParameter("operation_mode", mode); }
};

}
"#;

    fn accessors(events: &[Event]) -> Vec<&Accessor> {
        events
            .iter()
            .filter_map(|e| match e {
                Event::Accessor(a) => Some(a),
                Event::ClassOpen => None,
            })
            .collect()
    }

    #[test]
    fn scan_inline_accessors() {
        let events = scan(HEADER);
        assert!(matches!(events[0], Event::ClassOpen));
        let accs = accessors(&events);
        assert_eq!(accs.len(), 2);
        assert_eq!(accs[0].return_type, "int");
        assert_eq!(accs[0].name, "getOperationMode");
        assert!(accs[0].params.is_empty());
        assert_eq!(accs[1].name, "setOperationMode");
        assert_eq!(accs[1].params[0].ctype, "int");
        assert_eq!(accs[1].params[0].name(), Some("mode"));
    }

    #[test]
    fn forward_declarations_skipped() {
        let events = scan(HEADER);
        assert!(accessors(&events)
            .iter()
            .all(|a| a.name != "getParameterSet"));
    }

    #[test]
    fn doc_comment_attached_to_next_accessor() {
        let events = scan(HEADER);
        let accs = accessors(&events);
        let doc = accs[0].doc.as_deref().unwrap();
        assert!(doc.contains("Operation mode of the device."));
        // The following accessor had no comment of its own.
        assert!(accs[1].doc.is_none());
    }

    #[test]
    fn accessor_outside_class_body_ignored() {
        // depth 0 — never inside the class, so nothing is recognized.
        let events = scan("int getValue() { return 0; }\n");
        assert!(accessors(&events).is_empty());
    }

    #[test]
    fn get_at_line_start_not_recognized() {
        let input = "namespace n {\nclass VT_EXPORT DeviceParameters {\ngetGain() { return 0; }\n};\n}\n";
        let events = scan(input);
        assert!(accessors(&events).is_empty());
    }

    #[test]
    fn multi_line_body_tracked() {
        let input = r#"
namespace visiontransfer {
class VT_EXPORT DeviceParameters {
    void getAutoROI(int& x, int& y) {
        readAutoROI(x, y);
    }
    int getGain() { return readIntParameter("gain"); }
};
}
"#;
        let events = scan(input);
        let accs = accessors(&events);
        assert_eq!(accs.len(), 2);
        assert_eq!(accs[0].name, "getAutoROI");
        assert!(accs[0].params.iter().all(|p| p.is_reference()));
        assert_eq!(accs[1].name, "getGain");
    }

    #[test]
    fn class_open_event_only_at_namespace_depth() {
        // The trigger line at depth 0 must not fire.
        let events = scan("class VT_EXPORT DeviceParameters {\n};\n");
        assert!(events.is_empty());
    }
}
