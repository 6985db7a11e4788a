//! The capitalization core: trigger detection, symbol location, context
//! classification, keyword resolution, and the engine tying them together.
crate::reexport!(cursor);
crate::reexport!(trigger);
crate::reexport!(locator);
crate::reexport!(classifier);
crate::reexport!(resolver);
crate::reexport!(engine);
