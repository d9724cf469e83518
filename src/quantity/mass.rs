quantity!(Pounds, suffix: "lbs", precision: 0);
