//! Interfaces the host editor provides to the capitalization core, plus a
//! rope-backed `MemoryBuffer` implementing them for tools and tests.
crate::reexport!(mode);
crate::reexport!(buffer);
crate::reexport!(lexical);
crate::reexport!(selection);
crate::reexport!(memory);
