use crate::quantity::{money::Dollars, price::DollarsPerLitre};

quantity!(
    /// Fuel volume.
    Litres, suffix: "L", precision: 1
);

implement_mul!(Litres, DollarsPerLitre, Dollars);
