quantity!(DollarsPerKilowattHour, suffix: "CAD/kWh", precision: 4);
quantity!(DollarsPerLitre, suffix: "CAD/L", precision: 3);
quantity!(
    /// Per-distance rate, used for maintenance and per-kilometre credits.
    DollarsPerKilometre, suffix: "CAD/km", precision: 4
);
