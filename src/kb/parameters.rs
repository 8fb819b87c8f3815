//! The 39 standard engineering parameters with detection aliases.
//!
//! Names follow the classical contradiction-table nomenclature. Aliases are
//! lowercase substrings matched against lowercased problem text; longer
//! aliases count as more specific hits (see `crate::matcher`).

use super::ParameterSeed;

pub const PARAMETERS: &[ParameterSeed] = &[
    ParameterSeed {
        id: 1,
        name: "weight of moving object",
        aliases: &["weight", "heavy", "lightweight", "mass", "payload"],
    },
    ParameterSeed {
        id: 2,
        name: "weight of stationary object",
        aliases: &["weight", "dead weight", "ballast", "heavy base"],
    },
    ParameterSeed {
        id: 3,
        name: "length of moving object",
        aliases: &["length", "long", "elongated", "reach", "stroke"],
    },
    ParameterSeed {
        id: 4,
        name: "length of stationary object",
        aliases: &["length", "span", "height", "depth"],
    },
    ParameterSeed {
        id: 5,
        name: "area of moving object",
        aliases: &["area", "surface", "footprint", "coverage"],
    },
    ParameterSeed {
        id: 6,
        name: "area of stationary object",
        aliases: &["area", "surface area", "floor space", "panel"],
    },
    ParameterSeed {
        id: 7,
        name: "volume of moving object",
        aliases: &["volume", "bulky", "big", "size", "compact"],
    },
    ParameterSeed {
        id: 8,
        name: "volume of stationary object",
        aliases: &["volume", "interior space", "enclosure", "tank"],
    },
    ParameterSeed {
        id: 9,
        name: "speed",
        aliases: &["speed", "fast", "slow", "velocity", "quick", "latency"],
    },
    ParameterSeed {
        id: 10,
        name: "force",
        aliases: &["force", "thrust", "torque", "push", "pull", "grip"],
    },
    ParameterSeed {
        id: 11,
        name: "stress or pressure",
        aliases: &["pressure", "stress", "tension", "compression", "load"],
    },
    ParameterSeed {
        id: 12,
        name: "shape",
        aliases: &["shape", "form", "profile", "thin", "slim", "contour"],
    },
    ParameterSeed {
        id: 13,
        name: "stability of composition",
        aliases: &["stability", "stable", "unstable", "wobble", "balance", "drift"],
    },
    ParameterSeed {
        id: 14,
        name: "strength",
        aliases: &["strength", "strong", "weak", "sturdy", "rigid", "durable"],
    },
    ParameterSeed {
        id: 15,
        name: "duration of action of moving object",
        aliases: &["lifetime", "wear out", "service life", "endurance", "lifespan"],
    },
    ParameterSeed {
        id: 16,
        name: "duration of action of stationary object",
        aliases: &["shelf life", "standby life", "longevity", "aging"],
    },
    ParameterSeed {
        id: 17,
        name: "temperature",
        aliases: &["temperature", "heat", "hot", "cold", "thermal", "overheat", "cooling"],
    },
    ParameterSeed {
        id: 18,
        name: "illumination intensity",
        aliases: &["illumination", "brightness", "glare", "dim", "luminous", "backlight"],
    },
    ParameterSeed {
        id: 19,
        name: "use of energy by moving object",
        aliases: &["energy use", "consumption", "fuel", "drain", "power draw"],
    },
    ParameterSeed {
        id: 20,
        name: "use of energy by stationary object",
        aliases: &["standby power", "idle energy", "baseline draw"],
    },
    ParameterSeed {
        id: 21,
        name: "power",
        aliases: &["power", "battery", "wattage", "horsepower", "output power"],
    },
    ParameterSeed {
        id: 22,
        name: "loss of energy",
        aliases: &["energy loss", "waste heat", "dissipation", "inefficiency", "leakage"],
    },
    ParameterSeed {
        id: 23,
        name: "loss of substance",
        aliases: &["material loss", "waste", "spillage", "shrinkage", "scrap"],
    },
    ParameterSeed {
        id: 24,
        name: "loss of information",
        aliases: &["data loss", "information loss", "signal loss", "corruption"],
    },
    ParameterSeed {
        id: 25,
        name: "loss of time",
        aliases: &["delay", "downtime", "waiting", "cycle time", "turnaround"],
    },
    ParameterSeed {
        id: 26,
        name: "quantity of substance",
        aliases: &["quantity", "amount", "material usage", "inventory", "stock"],
    },
    ParameterSeed {
        id: 27,
        name: "reliability",
        aliases: &["reliability", "reliable", "failure", "breakdown", "fault", "crash"],
    },
    ParameterSeed {
        id: 28,
        name: "measurement accuracy",
        aliases: &["accuracy", "accurate", "measurement", "calibration", "error margin"],
    },
    ParameterSeed {
        id: 29,
        name: "manufacturing precision",
        aliases: &["precision", "tolerance", "machining", "repeatability", "exactness"],
    },
    ParameterSeed {
        id: 30,
        name: "object-affected harmful factors",
        aliases: &["damage", "corrosion", "contamination", "exposure", "hazard"],
    },
    ParameterSeed {
        id: 31,
        name: "object-generated harmful factors",
        aliases: &["emission", "noise", "pollution", "side effect", "interference"],
    },
    ParameterSeed {
        id: 32,
        name: "ease of manufacture",
        aliases: &["manufacturability", "fabrication", "assembly", "tooling", "easy to make"],
    },
    ParameterSeed {
        id: 33,
        name: "ease of operation",
        aliases: &["usability", "ease of use", "ergonomic", "user friendly", "convenient", "intuitive"],
    },
    ParameterSeed {
        id: 34,
        name: "ease of repair",
        aliases: &["repair", "maintenance", "serviceability", "fixable", "maintainable"],
    },
    ParameterSeed {
        id: 35,
        name: "adaptability or versatility",
        aliases: &["adaptability", "versatile", "flexible", "configurable", "adjustable"],
    },
    ParameterSeed {
        id: 36,
        name: "device complexity",
        aliases: &["complexity", "complex", "complicated", "simple", "intricate", "parts count"],
    },
    ParameterSeed {
        id: 37,
        name: "difficulty of detecting and measuring",
        aliases: &["diagnostics", "observability", "monitoring", "detection", "inspection"],
    },
    ParameterSeed {
        id: 38,
        name: "extent of automation",
        aliases: &["automation", "automatic", "automated", "manual", "autonomous"],
    },
    ParameterSeed {
        id: 39,
        name: "productivity",
        aliases: &["productivity", "throughput", "output rate", "yield", "efficiency"],
    },
];
