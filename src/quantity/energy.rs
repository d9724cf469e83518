use crate::quantity::{money::Dollars, price::DollarsPerKilowattHour};

quantity!(KilowattHours, suffix: "kWh", precision: 1);

implement_mul!(KilowattHours, DollarsPerKilowattHour, Dollars);
