//! The 40 classical inventive principles.
//!
//! Required fields (name, category, summary, detail, examples) are validated
//! as non-empty at catalog build; applications, steps, and benefits are
//! optional and may be empty for principles where the classical literature
//! gives little beyond the definition.

use super::PrincipleSeed;

pub const PRINCIPLES: &[PrincipleSeed] = &[
    PrincipleSeed {
        id: 1,
        name: "Segmentation",
        category: "structure",
        summary: "Divide an object into independent parts",
        detail: "Break an object or system into independent parts, make it easy to disassemble, or increase its degree of fragmentation so each piece can be handled, replaced, or optimized on its own.",
        examples: &[
            "Modular furniture that ships flat and assembles at home",
            "Microservice architecture replacing a monolithic server",
            "Sectional garage doors that roll up panel by panel",
            "Multi-stage rockets that drop spent segments",
        ],
        applications: &[
            "Product lines built from interchangeable modules",
            "Splitting a long pipeline into independently restartable stages",
        ],
        steps: &[
            "Identify seams where the object naturally divides",
            "Give each part a single responsibility and a clean interface",
            "Verify parts can be serviced or swapped independently",
        ],
        benefits: &[
            "Local failures stay local",
            "Parts evolve and ship on independent schedules",
        ],
        keywords: &["module", "segment", "split", "independent", "partition"],
    },
    PrincipleSeed {
        id: 2,
        name: "Taking out",
        category: "function",
        summary: "Extract the disturbing part or the only necessary part",
        detail: "Separate an interfering part or property from an object, or single out the only necessary part or property, so the useful function is kept and the harmful one is removed.",
        examples: &[
            "Noise-cancelling headphones extracting the unwanted signal",
            "Placing a loud compressor outside the building",
            "Filtering impurities out of a process stream",
            "Isolating error handling away from the hot path",
        ],
        applications: &[
            "Relocating heat or noise sources away from users",
            "Extracting a core library from a tangled application",
        ],
        steps: &[],
        benefits: &["Keeps the useful function without its side effects"],
        keywords: &["extract", "remove", "isolate", "filter", "separate"],
    },
    PrincipleSeed {
        id: 3,
        name: "Local quality",
        category: "structure",
        summary: "Make each part of an object serve its own best condition",
        detail: "Change a uniform structure or environment into a non-uniform one; let each part of the object carry out a different, locally optimal function.",
        examples: &[
            "Pencil with an eraser on one end",
            "Ergonomic grips hardened only where they wear",
            "Gradient-hardened gear teeth",
            "Per-route cache policies instead of one global policy",
        ],
        applications: &[
            "Differentiated service tiers within one platform",
            "Zone-based climate control",
        ],
        steps: &[],
        benefits: &[],
        keywords: &["local", "custom", "differentiated", "zone", "tailored"],
    },
    PrincipleSeed {
        id: 4,
        name: "Asymmetry",
        category: "structure",
        summary: "Replace symmetrical forms with asymmetrical ones",
        detail: "If an object is symmetrical, make it asymmetrical; if it is already asymmetrical, increase the degree of asymmetry to match the asymmetry of the task.",
        examples: &[
            "USB-C plugs keyed so they still orient internally",
            "Asymmetric tire tread for wet and dry grip",
            "Offset mixer paddles that prevent dead zones",
            "One-way clamps that grip in a single direction",
        ],
        applications: &["Mistake-proof connectors and fixtures"],
        steps: &[],
        benefits: &[],
        keywords: &["asymmetric", "offset", "uneven", "directional", "keyed"],
    },
    PrincipleSeed {
        id: 5,
        name: "Merging",
        category: "function",
        summary: "Bring identical or adjacent operations together",
        detail: "Join identical or similar objects, or merge operations that are adjacent in time or space, so they share infrastructure and act as one.",
        examples: &[
            "Batch processing of small requests into one write",
            "Multi-blade razors",
            "Combining wash and dry in a single appliance",
            "Heat exchanger networks sharing one coolant loop",
        ],
        applications: &["Consolidating duplicated services into one shared one"],
        steps: &[],
        benefits: &["Shared overhead amortized across operations"],
        keywords: &["merge", "combine", "batch", "consolidate", "join"],
    },
    PrincipleSeed {
        id: 6,
        name: "Universality",
        category: "function",
        summary: "Make one object perform multiple functions",
        detail: "Let one part or object perform several functions, eliminating the need for other parts; standardize so the same element fits many uses.",
        examples: &[
            "Smartphone replacing camera, map, and music player",
            "Sofa bed",
            "A single connector standard for power and data",
            "One general-purpose tool chain for many targets",
        ],
        applications: &["Platform products serving several markets"],
        steps: &[],
        benefits: &["Fewer parts to make, stock, and learn"],
        keywords: &["universal", "multifunction", "standard", "shared", "general"],
    },
    PrincipleSeed {
        id: 7,
        name: "Nested doll",
        category: "structure",
        summary: "Place objects inside each other",
        detail: "Put one object inside another, which sits inside a third; or pass one part through a cavity of another, so the same envelope holds more.",
        examples: &[
            "Telescoping antenna sections",
            "Measuring cups that stack into one",
            "Retractable seat belts winding into the pillar",
            "Nested virtualization layers",
        ],
        applications: &["Collapsible equipment for transport and storage"],
        steps: &[],
        benefits: &[],
        keywords: &["nested", "telescopic", "stacked", "retractable", "inside"],
    },
    PrincipleSeed {
        id: 8,
        name: "Anti-weight",
        category: "forces",
        summary: "Compensate weight with lift or buoyancy",
        detail: "Compensate the weight of an object by merging it with something that provides lift, or by interaction with the environment such as aerodynamic or hydrodynamic forces.",
        examples: &[
            "Aerofoil lift carrying an aircraft's mass",
            "Helium balloons supporting survey instruments",
            "Counterweights in elevators and cranes",
            "Hydrofoil hulls rising out of the water",
        ],
        applications: &["Counterbalanced mechanisms that feel weightless to the operator"],
        steps: &[],
        benefits: &[],
        keywords: &["counterweight", "buoyancy", "lift", "balance", "aerodynamic"],
    },
    PrincipleSeed {
        id: 9,
        name: "Preliminary anti-action",
        category: "safety",
        summary: "Pre-stress against a known harmful effect",
        detail: "If an action will contain both useful and harmful effects, precede it with a counter-action; create stresses beforehand that will oppose known harmful working stresses.",
        examples: &[
            "Pre-stressed concrete beams",
            "Vaccination priming the immune system",
            "Pre-tensioned bolts resisting vibration loosening",
            "Backpressure applied before opening a valve",
        ],
        applications: &["Countermeasures loaded before a risky operation"],
        steps: &[],
        benefits: &[],
        keywords: &["prestress", "counteract", "vaccinate", "anticipate", "oppose"],
    },
    PrincipleSeed {
        id: 10,
        name: "Preliminary action",
        category: "safety",
        summary: "Perform required changes before they are needed",
        detail: "Carry out all or part of a required action in advance, and arrange objects so they can act from the most convenient position without time lost in delivery.",
        examples: &[
            "Pre-heated moulds shortening cycle time",
            "Pre-computed indexes answering queries instantly",
            "Self-adhesive stamps replacing glue at use time",
            "Staged material at the workstation before the shift",
        ],
        applications: &[
            "Warm caches and pre-provisioned capacity",
            "Kitting parts before assembly",
        ],
        steps: &[
            "List actions repeated at use time",
            "Move the invariant portion ahead of time",
        ],
        benefits: &["Latency disappears from the critical path"],
        keywords: &["prepare", "precompute", "preload", "advance", "staged"],
    },
    PrincipleSeed {
        id: 11,
        name: "Beforehand cushioning",
        category: "safety",
        summary: "Compensate low reliability with prepared safeguards",
        detail: "Prepare emergency means beforehand to compensate for the relatively low reliability of an object; the cushion acts only when things go wrong.",
        examples: &[
            "Airbags and crumple zones",
            "Database backups and write-ahead logs",
            "Circuit breakers protecting wiring",
            "Parachutes on drones",
        ],
        applications: &["Fallback paths wired in before launch"],
        steps: &[],
        benefits: &["Failures degrade instead of destroy"],
        keywords: &["backup", "cushion", "safeguard", "failsafe", "emergency"],
    },
    PrincipleSeed {
        id: 12,
        name: "Equipotentiality",
        category: "forces",
        summary: "Avoid raising or lowering in a working field",
        detail: "Change working conditions so an object need not be raised or lowered; keep it at one potential so no work is wasted against gravity or another field.",
        examples: &[
            "Spring-loaded parts bins rising as they empty",
            "Canal locks keeping barges level through terrain",
            "Roller conveyors moving engines at bench height",
            "Constant-height lift tables in assembly",
        ],
        applications: &["Workstations where heavy items stay at working height"],
        steps: &[],
        benefits: &[],
        keywords: &["level", "constant height", "potential", "gravity", "conveyor"],
    },
    PrincipleSeed {
        id: 13,
        name: "The other way round",
        category: "adaptability",
        summary: "Invert the action or turn the object upside down",
        detail: "Invert the action used to solve the problem: make movable parts fixed and fixed parts movable, or turn the object or process upside down.",
        examples: &[
            "Moving walkway carrying standing passengers",
            "Rotating the tool instead of the workpiece",
            "Inverted classroom where study precedes lecture",
            "Pull-based consumers replacing pushed messages",
        ],
        applications: &["Reversing which side of an interface does the work"],
        steps: &[],
        benefits: &[],
        keywords: &["invert", "reverse", "opposite", "upside down", "swap"],
    },
    PrincipleSeed {
        id: 14,
        name: "Spheroidality",
        category: "structure",
        summary: "Replace straight lines with curves and sliding with rolling",
        detail: "Move from rectilinear parts and flat surfaces to curved ones; use rollers, balls, and spirals; replace linear motion with rotary motion and exploit centrifugal forces.",
        examples: &[
            "Ball bearings replacing sliding bushings",
            "Arched bridges carrying load in compression",
            "Spiral ramps in multi-storey car parks",
            "Domed pressure vessel ends",
        ],
        applications: &["Curved geometry spreading stress that corners concentrate"],
        steps: &[],
        benefits: &[],
        keywords: &["curve", "sphere", "roll", "rotary", "arch"],
    },
    PrincipleSeed {
        id: 15,
        name: "Dynamics",
        category: "dynamics",
        summary: "Let the object adapt to its optimal working regime",
        detail: "Allow or design characteristics of an object to change to be optimal at each stage of operation; divide an object into parts capable of movement relative to each other; make a rigid object movable or adaptive.",
        examples: &[
            "Variable-geometry aircraft wings",
            "Adaptive cruise control adjusting to traffic",
            "Auto-scaling compute responding to load",
            "Flexible endoscopes steering through anatomy",
        ],
        applications: &[
            "Systems that retune themselves per operating phase",
            "Articulated structures following uneven terrain",
        ],
        steps: &[
            "Find the stages with conflicting optima",
            "Add a degree of freedom that shifts between them",
        ],
        benefits: &["One device covers regimes that needed several"],
        keywords: &["dynamic", "adaptive", "adjust", "responsive", "movable"],
    },
    PrincipleSeed {
        id: 16,
        name: "Partial or excessive actions",
        category: "economy",
        summary: "Do slightly less or slightly more than required",
        detail: "If exactly the required effect is hard to achieve, use slightly less or slightly more of the action and remove the excess or top up the shortfall afterwards.",
        examples: &[
            "Overspray then wipe excess paint from recesses",
            "Rough machining followed by finish passes",
            "Overprovisioning capacity then trimming idle nodes",
            "Filling above the line then metering off precisely",
        ],
        applications: &["Two-stage coarse/fine processes"],
        steps: &[],
        benefits: &[],
        keywords: &["partial", "excess", "approximate", "trim", "overshoot"],
    },
    PrincipleSeed {
        id: 17,
        name: "Another dimension",
        category: "structure",
        summary: "Move into an additional dimension",
        detail: "Move an object in two- or three-dimensional space instead of a line; use multi-storey arrangements, tilt or re-orient objects, and use the reverse side.",
        examples: &[
            "Double-sided printed circuit boards",
            "Vertical farming stacking growing trays",
            "3D NAND stacking memory cells in layers",
            "Spiral staircases using height instead of floor area",
        ],
        applications: &["Stacked layouts where footprint is the constraint"],
        steps: &[],
        benefits: &[],
        keywords: &["vertical", "stack", "layer", "3d", "orientation"],
    },
    PrincipleSeed {
        id: 18,
        name: "Mechanical vibration",
        category: "dynamics",
        summary: "Set the object into oscillation",
        detail: "Cause an object to oscillate or vibrate; increase frequency up to ultrasonic; use resonance, piezoelectric vibrators, and combined field oscillations.",
        examples: &[
            "Ultrasonic cleaning baths",
            "Vibratory bowl feeders orienting parts",
            "Concrete compaction by poker vibrators",
            "Ultrasonic welding of plastics",
        ],
        applications: &["Friction reduction and settling by vibration"],
        steps: &[],
        benefits: &[],
        keywords: &["vibration", "oscillate", "ultrasonic", "resonance", "shake"],
    },
    PrincipleSeed {
        id: 19,
        name: "Periodic action",
        category: "dynamics",
        summary: "Replace continuous action with pulses",
        detail: "Use periodic or pulsating actions instead of continuous ones; change the magnitude or frequency; use pauses between impulses to perform a different action.",
        examples: &[
            "Impact wrenches delivering torque in pulses",
            "Pulse-width modulation controlling motor power",
            "Intermittent windscreen wipers",
            "Duty-cycled sensors sleeping between samples",
        ],
        applications: &["Power delivery shaped as duty cycles"],
        steps: &[],
        benefits: &["Pauses become usable time and saved energy"],
        keywords: &["pulse", "periodic", "intermittent", "duty cycle", "rhythm"],
    },
    PrincipleSeed {
        id: 20,
        name: "Continuity of useful action",
        category: "dynamics",
        summary: "Keep all parts working at full load",
        detail: "Carry on work continuously with all parts of an object operating at full capacity; eliminate idle and intermediate motions.",
        examples: &[
            "Rotary printing presses that never stop the web",
            "Pipelined processors keeping every stage busy",
            "Continuous casting replacing batch ingots",
            "Flat-out kiln operation with staged loading",
        ],
        applications: &["Removing idle strokes from machine cycles"],
        steps: &[],
        benefits: &[],
        keywords: &["continuous", "nonstop", "full load", "pipeline", "utilization"],
    },
    PrincipleSeed {
        id: 21,
        name: "Skipping",
        category: "dynamics",
        summary: "Rush through harmful or hazardous stages",
        detail: "Conduct a process or individual stages at high speed so that harmful or hazardous side effects have no time to develop.",
        examples: &[
            "Flash pasteurization preserving flavour",
            "High-speed dentist drills reducing heat damage",
            "Quick-sear cooking keeping the interior rare",
            "Fast transfer through a furnace hot zone",
        ],
        applications: &["Speeding through the window where damage accrues"],
        steps: &[],
        benefits: &[],
        keywords: &["skip", "rush", "high speed", "brief", "flash"],
    },
    PrincipleSeed {
        id: 22,
        name: "Blessing in disguise",
        category: "safety",
        summary: "Turn harm into benefit",
        detail: "Use harmful factors or environmental effects to obtain a positive effect; eliminate a harmful action by adding it to another harmful action, or amplify it until it stops being harmful.",
        examples: &[
            "Waste heat recovered for district heating",
            "Backfires set to stop forest fires",
            "Vaccines built from attenuated pathogens",
            "Regenerative braking charging the battery",
        ],
        applications: &["Recovering value from waste streams"],
        steps: &[],
        benefits: &[],
        keywords: &["harm to benefit", "recover", "exploit", "waste", "convert"],
    },
    PrincipleSeed {
        id: 23,
        name: "Feedback",
        category: "control",
        summary: "Introduce or refine feedback",
        detail: "Introduce feedback to improve a process or action; if feedback already exists, change its magnitude, sensitivity, or sign to match changed conditions.",
        examples: &[
            "Thermostats closing the heating loop",
            "PID controllers holding a setpoint",
            "Autofocus adjusting from sensor contrast",
            "Error budgets throttling release pace",
        ],
        applications: &["Closing open loops that drift"],
        steps: &[
            "Measure the output that matters",
            "Feed the deviation back into the input",
        ],
        benefits: &["Accuracy survives disturbances"],
        keywords: &["feedback", "loop", "sensor", "regulate", "closed loop"],
    },
    PrincipleSeed {
        id: 24,
        name: "Intermediary",
        category: "function",
        summary: "Use an intermediary carrier or process",
        detail: "Use an intermediary object to carry or transfer an action; temporarily merge the object with another that is easy to remove afterwards.",
        examples: &[
            "Oven mitts between hand and hot tray",
            "Message brokers decoupling producers and consumers",
            "Sacrificial machining fixtures",
            "Transfer paper carrying designs onto fabric",
        ],
        applications: &["Adapters shielding two systems from each other"],
        steps: &[],
        benefits: &[],
        keywords: &["intermediary", "broker", "carrier", "adapter", "middleman"],
    },
    PrincipleSeed {
        id: 25,
        name: "Self-service",
        category: "function",
        summary: "Make the object serve and maintain itself",
        detail: "Let an object serve itself by performing auxiliary and repair operations, and use waste resources, energy, or substances it already produces.",
        examples: &[
            "Self-cleaning ovens burning off residue",
            "Self-healing polymers closing scratches",
            "Watchdog processes restarting failed services",
            "Exhaust-driven turbochargers",
        ],
        applications: &[
            "Maintenance folded into normal operation",
            "Automation loops that repair drift without operators",
        ],
        steps: &[],
        benefits: &["Auxiliary work stops consuming external effort"],
        keywords: &["self service", "self healing", "automatic", "autonomous", "self repair"],
    },
    PrincipleSeed {
        id: 26,
        name: "Copying",
        category: "function",
        summary: "Use cheap copies instead of the fragile original",
        detail: "Use simple and inexpensive copies instead of an object that is unavailable, expensive, or fragile; replace the object or process with its optical or digital image, possibly scaled.",
        examples: &[
            "Crash-test simulations before physical prototypes",
            "Photogrammetry measuring from images",
            "Staging environments mirroring production",
            "Training on replicas instead of live equipment",
        ],
        applications: &["Working on a model when the original is precious"],
        steps: &[],
        benefits: &[],
        keywords: &["copy", "replica", "simulation", "image", "mirror"],
    },
    PrincipleSeed {
        id: 27,
        name: "Cheap short-living objects",
        category: "economy",
        summary: "Replace the expensive with cheap disposables",
        detail: "Replace an expensive object with a collection of inexpensive short-lived ones, conceding some qualities such as service life.",
        examples: &[
            "Disposable scalpels guaranteeing sharpness",
            "Paper cups at water coolers",
            "Commodity servers replacing mainframes",
            "Single-use pipette tips preventing contamination",
        ],
        applications: &["Fleets of cheap units absorbing individual failures"],
        steps: &[],
        benefits: &["Replacement becomes cheaper than maintenance"],
        keywords: &["disposable", "cheap", "replaceable", "commodity", "economical"],
    },
    PrincipleSeed {
        id: 28,
        name: "Mechanics substitution",
        category: "control",
        summary: "Replace mechanical means with fields",
        detail: "Replace a mechanical system with a sensory, optical, acoustic, thermal, electric, or magnetic one; use fields to interact with the object and move from static to dynamic fields.",
        examples: &[
            "Magnetic couplings replacing sealed shafts",
            "Optical encoders replacing contact switches",
            "Induction heating replacing flame",
            "Capacitive touch replacing mechanical buttons",
        ],
        applications: &["Contact-free sensing and actuation"],
        steps: &[],
        benefits: &["No contact means no wear at the interface"],
        keywords: &["magnetic", "optical", "field", "sensor", "contactless"],
    },
    PrincipleSeed {
        id: 29,
        name: "Pneumatics and hydraulics",
        category: "forces",
        summary: "Use gas and liquid instead of solid parts",
        detail: "Use gas or liquid parts of an object instead of solid parts, such as inflatable, hydraulic, air-cushion, or hydrostatic elements.",
        examples: &[
            "Air suspension smoothing vehicle ride",
            "Hydraulic brakes multiplying pedal force",
            "Inflatable emergency slides",
            "Air bearings floating precision stages",
        ],
        applications: &["Force transmission through hoses instead of linkages"],
        steps: &[],
        benefits: &[],
        keywords: &["pneumatic", "hydraulic", "inflatable", "fluid", "air cushion"],
    },
    PrincipleSeed {
        id: 30,
        name: "Flexible shells and thin films",
        category: "materials",
        summary: "Isolate with flexible shells instead of rigid structures",
        detail: "Use flexible shells and thin films instead of three-dimensional structures; isolate an object from its environment with a thin barrier.",
        examples: &[
            "Blister packaging protecting tablets",
            "Greenhouse films replacing glass houses",
            "Conformal coatings shielding circuit boards",
            "Inflatable storage domes",
        ],
        applications: &["Lightweight enclosures and barrier layers"],
        steps: &[],
        benefits: &[],
        keywords: &["film", "membrane", "shell", "coating", "barrier"],
    },
    PrincipleSeed {
        id: 31,
        name: "Porous materials",
        category: "materials",
        summary: "Make the object porous or exploit added pores",
        detail: "Make an object porous or add porous elements; if it is already porous, fill the pores in advance with a useful substance or function.",
        examples: &[
            "Sintered bronze bearings holding their own oil",
            "Activated carbon filters",
            "Foam cores stiffening sandwich panels at low weight",
            "Wicking structures in heat pipes",
        ],
        applications: &["Storage and transport inside the material itself"],
        steps: &[],
        benefits: &[],
        keywords: &["porous", "foam", "wick", "absorb", "sintered"],
    },
    PrincipleSeed {
        id: 32,
        name: "Color changes",
        category: "control",
        summary: "Change color or transparency to reveal or conceal",
        detail: "Change the color or transparency of an object or its surroundings; use colored additives or luminescent tracers to observe what is hard to see.",
        examples: &[
            "Thermochromic strips showing battery charge",
            "Dye penetrant revealing hairline cracks",
            "Welding visors darkening on arc strike",
            "Syntax highlighting exposing code structure",
        ],
        applications: &["State made visible without instruments"],
        steps: &[],
        benefits: &[],
        keywords: &["color", "transparent", "indicator", "dye", "visual"],
    },
    PrincipleSeed {
        id: 33,
        name: "Homogeneity",
        category: "materials",
        summary: "Make interacting objects of the same material",
        detail: "Make objects that interact with a given object out of the same or compatible material, so interfaces do not corrode, contaminate, or mismatch in expansion.",
        examples: &[
            "Welding rods matched to the parent metal",
            "Titanium implants paired with titanium fasteners",
            "Same-polymer snap fits that recycle together",
            "Ceramic bearings in ceramic races",
        ],
        applications: &["Interfaces that age at the same rate"],
        steps: &[],
        benefits: &[],
        keywords: &["same material", "compatible", "matched", "uniform", "homogeneous"],
    },
    PrincipleSeed {
        id: 34,
        name: "Discarding and recovering",
        category: "economy",
        summary: "Discard spent parts or restore them in place",
        detail: "Make portions of an object that have fulfilled their function disappear - dissolve, evaporate, eject - or restore consumable parts directly during operation.",
        examples: &[
            "Dissolvable surgical stitches",
            "Ablative heat shields burning away on re-entry",
            "Self-sharpening rotary blades",
            "Log rotation discarding expired segments",
        ],
        applications: &["Spent material leaving without a service step"],
        steps: &[],
        benefits: &[],
        keywords: &["discard", "dissolve", "eject", "restore", "consume"],
    },
    PrincipleSeed {
        id: 35,
        name: "Parameter changes",
        category: "adaptability",
        summary: "Change the physical state or key parameters",
        detail: "Change an object's physical state, concentration, consistency, flexibility, or temperature so the same substance behaves as a different working medium.",
        examples: &[
            "Liquefying gas for compact transport",
            "Freezing soft food before precision slicing",
            "Tempering steel to trade hardness for toughness",
            "Tuning compression level against CPU cost",
        ],
        applications: &[
            "State changes unlocking easier processing windows",
            "Re-tuning operating points instead of redesigning",
        ],
        steps: &[
            "List the adjustable parameters of the medium",
            "Find the state in which the conflict disappears",
        ],
        benefits: &["A new regime without new hardware"],
        keywords: &["state", "parameter", "tune", "concentration", "flexibility"],
    },
    PrincipleSeed {
        id: 36,
        name: "Phase transitions",
        category: "chemistry",
        summary: "Exploit effects that accompany phase changes",
        detail: "Use phenomena occurring during phase transitions - volume change, heat absorption or release - as the working effect itself.",
        examples: &[
            "Heat pipes moving heat via evaporation and condensation",
            "Phase-change materials buffering room temperature",
            "Freeze-thaw splitting of rock",
            "Vapour chambers spreading hot-spot heat",
        ],
        applications: &["Latent heat used as a thermal battery"],
        steps: &[],
        benefits: &[],
        keywords: &["phase", "melt", "evaporate", "latent heat", "condense"],
    },
    PrincipleSeed {
        id: 37,
        name: "Thermal expansion",
        category: "control",
        summary: "Use expansion and contraction of materials",
        detail: "Use thermal expansion or contraction of materials; combine materials with different expansion coefficients to produce motion or force from temperature change.",
        examples: &[
            "Bimetallic strips actuating thermostats",
            "Shrink-fitting gears onto shafts",
            "Expansion joints in bridges and rails",
            "Wax motors opening greenhouse vents",
        ],
        applications: &["Temperature-driven actuation with no motor"],
        steps: &[],
        benefits: &[],
        keywords: &["thermal", "expansion", "contraction", "bimetal", "shrink fit"],
    },
    PrincipleSeed {
        id: 38,
        name: "Strong oxidants",
        category: "chemistry",
        summary: "Enrich the working atmosphere",
        detail: "Replace ordinary air with oxygen-enriched air, pure oxygen, or ionized media to intensify a reaction or process.",
        examples: &[
            "Oxy-fuel cutting torches",
            "Oxygen-enriched steelmaking converters",
            "Hyperbaric oxygen wound therapy",
            "Ozone treatment in water purification",
        ],
        applications: &["Intensifying combustion and oxidation steps"],
        steps: &[],
        benefits: &[],
        keywords: &["oxygen", "oxidant", "enriched", "ionized", "intensify"],
    },
    PrincipleSeed {
        id: 39,
        name: "Inert atmosphere",
        category: "chemistry",
        summary: "Replace the normal environment with an inert one",
        detail: "Replace a normal environment with an inert one, or add neutral substances and inert additives, so unwanted reactions cannot start.",
        examples: &[
            "Argon shielding in TIG welding",
            "Nitrogen flushing in food packaging",
            "Inert-gas fire suppression in server rooms",
            "Argon fill between insulating glass panes",
        ],
        applications: &["Suppressing oxidation and fire risk at the source"],
        steps: &[],
        benefits: &[],
        keywords: &["inert", "nitrogen", "argon", "shielding", "neutral"],
    },
    PrincipleSeed {
        id: 40,
        name: "Composite materials",
        category: "materials",
        summary: "Replace uniform materials with composites",
        detail: "Move from uniform materials to composite ones that combine properties no single material offers, tailoring stiffness, weight, and strength locally.",
        examples: &[
            "Carbon-fibre bicycle frames",
            "Reinforced concrete combining steel and cement",
            "Glass-fibre circuit board laminates",
            "Layered ski cores mixing wood and fibre",
        ],
        applications: &[
            "Structures tuned by fibre direction and layup",
            "Hybrid stacks mixing materials per layer's job",
        ],
        steps: &[],
        benefits: &["Properties combined beyond any single material"],
        keywords: &["composite", "fibre", "laminate", "hybrid", "reinforced"],
    },
];
