//! Output emitters — one append-only line buffer per generated file.
//!
//! Both buffers preserve scan order exactly and are serialized with plain
//! `\n` joins, keeping regenerated files stable for diffing and for the
//! docstring substitution pass that runs on the wrapper source afterwards.

pub mod pxd;
pub mod pyx;

/// Warning frame at the top of every generated file. Kept verbatim so the
/// regenerated files match the existing checked-in output byte for byte.
pub(crate) const BANNER: [&str; 6] = [
    "# !!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!",
    "# !!  CAUTION                                                        !!",
    "# !!                                                                 !!",
    "# !!  This file is autogenerated from the libvisiontransfer headers  !!",
    "# !!  using autogen_parameters.py - manual changes are not permanent !!",
    "# !!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!",
];
