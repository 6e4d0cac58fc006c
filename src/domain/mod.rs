// Domain layer: the fixed message. No dependencies beyond std.

pub mod model;
