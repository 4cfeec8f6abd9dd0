// Domain layer: the greeting itself. No dependencies beyond std.

pub mod model;
