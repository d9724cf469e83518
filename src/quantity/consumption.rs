quantity!(KilowattHoursPer100Km, suffix: "kWh/100km", precision: 2);
quantity!(LitresPer100Km, suffix: "L/100km", precision: 2);
