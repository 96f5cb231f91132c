//! Formula Tables
//!
//! Pre-authored sign expansions for chemical and physics formulas, and the
//! explanation contexts attached to well-known formulas and identities.
//! Tables are ordered: substitution walks them front to back.

/// Chemical formula (lowercase, no whitespace) -> sign tokens
pub const CHEM_FORMULAS: &[(&str, &str)] = &[
    ("h2o", "H TWO O"),
    ("co2", "C O TWO"),
    ("o2", "O TWO"),
    ("n2", "N TWO"),
    ("h2", "H TWO"),
    ("nacl", "N A C L"),
    ("h2so4", "H TWO S O FOUR"),
    ("hcl", "H C L"),
    ("naoh", "N A O H"),
    ("ch4", "C H FOUR"),
    ("nh3", "N H THREE"),
    ("c6h12o6", "C SIX H TWELVE O SIX"),
    ("fe2o3", "F E TWO O THREE"),
    ("caco3", "C A C O THREE"),
    ("no2", "N O TWO"),
    ("so2", "S O TWO"),
    ("so3", "S O THREE"),
    ("hno3", "H N O THREE"),
    ("h3po4", "H THREE P O FOUR"),
    ("ca(oh)2", "C A OPEN PAREN O H CLOSE PAREN TWO"),
    ("mgcl2", "M G C L TWO"),
    ("al2o3", "A L TWO O THREE"),
    ("kcl", "K C L"),
    ("koh", "K O H"),
    ("nahco3", "N A H C O THREE"),
    ("na2co3", "N A TWO C O THREE"),
    ("c2h5oh", "C TWO H FIVE O H"),
    ("ch3cooh", "C H THREE C O O H"),
    ("c2h4", "C TWO H FOUR"),
    ("c2h2", "C TWO H TWO"),
    ("c3h8", "C THREE H EIGHT"),
    ("c4h10", "C FOUR H TEN"),
    ("sio2", "S I O TWO"),
    ("p2o5", "P TWO O FIVE"),
    ("mno2", "M N O TWO"),
    ("zno", "Z N O"),
    ("cuso4", "C U S O FOUR"),
    ("feso4", "F E S O FOUR"),
    ("agno3", "A G N O THREE"),
    ("bacl2", "B A C L TWO"),
    ("pbno3", "P B N O THREE"),
    ("kmno4", "K M N O FOUR"),
    ("k2cr2o7", "K TWO C R TWO O SEVEN"),
    ("na2so4", "N A TWO S O FOUR"),
    ("caso4", "C A S O FOUR"),
    ("mg(oh)2", "M G OPEN PAREN O H CLOSE PAREN TWO"),
    ("al(oh)3", "A L OPEN PAREN O H CLOSE PAREN THREE"),
    ("fe(oh)3", "F E OPEN PAREN O H CLOSE PAREN THREE"),
    ("cu(oh)2", "C U OPEN PAREN O H CLOSE PAREN TWO"),
    ("nh4cl", "N H FOUR C L"),
    ("nh4no3", "N H FOUR N O THREE"),
    ("co", "C O"),
    ("no", "N O"),
    ("n2o", "N TWO O"),
    ("cl2", "C L TWO"),
    ("br2", "B R TWO"),
    ("i2", "I TWO"),
    ("f2", "F TWO"),
    ("he", "H E"),
    ("ne", "N E"),
    ("ar", "A R"),
];

/// Physics formula natural key (lowercase, caret-free) -> sign tokens
pub const PHYSICS_FORMULAS: &[(&str, &str)] = &[
    ("f=ma", "F EQUAL M A"),
    ("e=mc2", "E EQUAL M C POWER TWO"),
    ("v=ir", "V EQUAL I R"),
    ("p=iv", "P EQUAL I V"),
    ("pv=nrt", "P V EQUAL N R T"),
    ("f=kx", "F EQUAL K X"),
    ("v=u+at", "V EQUAL U ADD A T"),
    ("v=u+a*t", "V EQUAL U ADD A T"),
    ("s=ut+1/2at2", "S EQUAL U T ADD ONE DIVIDE TWO A T POWER TWO"),
    ("v2=u2+2as", "V POWER TWO EQUAL U POWER TWO ADD TWO A S"),
    ("f=gm1m2/r2", "F EQUAL G M ONE M TWO DIVIDE R POWER TWO"),
    ("ke=1/2mv2", "K E EQUAL ONE DIVIDE TWO M V POWER TWO"),
    ("ke=0.5mv2", "K E EQUAL ONE DIVIDE TWO M V POWER TWO"),
    ("pe=mgh", "P E EQUAL M G H"),
    ("w=fd", "W EQUAL F D"),
    ("p=w/t", "P EQUAL W DIVIDE T"),
    ("λ=v/f", "LAMBDA EQUAL V DIVIDE F"),
    ("f=kq1q2/r2", "F EQUAL K Q ONE Q TWO DIVIDE R POWER TWO"),
    ("s=d/t", "S EQUAL D DIVIDE T"),
    ("v=d/t", "V EQUAL D DIVIDE T"),
    ("a=v/t", "A EQUAL V DIVIDE T"),
    ("a=(v-u)/t", "A EQUAL V U DIVIDE T"),
];

/// Exact chemical formula lookup
pub fn chemical_expansion(key: &str) -> Option<&'static str> {
    CHEM_FORMULAS
        .iter()
        .find(|(formula, _)| *formula == key)
        .map(|(_, expansion)| *expansion)
}

/// Exact physics formula lookup by natural key
pub fn physics_expansion(key: &str) -> Option<&'static str> {
    PHYSICS_FORMULAS
        .iter()
        .find(|(formula, _)| *formula == key)
        .map(|(_, expansion)| *expansion)
}

/// Explanation attached to a formula or identity
#[derive(Debug, Clone, Copy)]
pub struct FormulaContext {
    pub name: &'static str,
    /// Ordered (symbol, meaning) pairs
    pub variables: &'static [(&'static str, &'static str)],
    pub meaning: &'static str,
    pub example: &'static str,
}

pub const FORMULA_CONTEXT: &[(&str, FormulaContext)] = &[
    (
        "f=ma",
        FormulaContext {
            name: "Newton's Second Law of Motion",
            variables: &[
                ("F", "Force (push or pull on object)"),
                ("M", "Mass (how heavy the object is)"),
                ("A", "Acceleration (how fast speed changes)"),
            ],
            meaning: "Force equals mass times acceleration. Heavier objects need more force to move.",
            example: "Pushing a shopping cart: empty cart (low mass) is easy to push, full cart (high mass) needs more force.",
        },
    ),
    (
        "e=mc2",
        FormulaContext {
            name: "Einstein's Mass-Energy Equivalence",
            variables: &[
                ("E", "Energy (total energy stored)"),
                ("M", "Mass (amount of matter)"),
                ("C", "Speed of light (very fast, 300 million meters per second)"),
            ],
            meaning: "A small amount of mass contains enormous energy. Mass and energy are the same thing.",
            example: "Nuclear power plants convert tiny amounts of matter into huge amounts of electricity.",
        },
    ),
    (
        "v=ir",
        FormulaContext {
            name: "Ohm's Law",
            variables: &[
                ("V", "Voltage (electrical pressure)"),
                ("I", "Current (flow of electricity)"),
                ("R", "Resistance (opposition to flow)"),
            ],
            meaning: "Voltage equals current times resistance. More resistance means less current flows.",
            example: "Water pipe: voltage is water pressure, current is water flow, resistance is pipe thickness.",
        },
    ),
    (
        "p=iv",
        FormulaContext {
            name: "Electrical Power",
            variables: &[
                ("P", "Power (energy used per second)"),
                ("I", "Current (flow of electricity)"),
                ("V", "Voltage (electrical pressure)"),
            ],
            meaning: "Electrical power equals current times voltage.",
            example: "A 100-watt light bulb uses more power than a 40-watt bulb.",
        },
    ),
    (
        "pv=nrt",
        FormulaContext {
            name: "Ideal Gas Law",
            variables: &[
                ("P", "Pressure (force on walls)"),
                ("V", "Volume (space gas fills)"),
                ("N", "Number of moles (amount of gas)"),
                ("R", "Gas constant (fixed number)"),
                ("T", "Temperature (how hot)"),
            ],
            meaning: "Connects pressure, volume, and temperature of a gas. Heat gas and it expands.",
            example: "Balloon in sun expands because heat increases pressure inside.",
        },
    ),
    (
        "f=kx",
        FormulaContext {
            name: "Hooke's Law",
            variables: &[
                ("F", "Force (push or pull)"),
                ("K", "Spring constant (stiffness)"),
                ("X", "Displacement (how far stretched)"),
            ],
            meaning: "Force needed to stretch a spring is proportional to the distance stretched.",
            example: "Pulling a rubber band: pull more, it pulls back harder.",
        },
    ),
    (
        "v=u+at",
        FormulaContext {
            name: "First Equation of Motion",
            variables: &[
                ("V", "Final velocity (end speed)"),
                ("U", "Initial velocity (start speed)"),
                ("A", "Acceleration (speed change rate)"),
                ("T", "Time (duration)"),
            ],
            meaning: "Final speed equals starting speed plus acceleration over time.",
            example: "Car starting from rest: the longer you press the gas pedal, the faster you go.",
        },
    ),
    (
        "pe=mgh",
        FormulaContext {
            name: "Gravitational Potential Energy",
            variables: &[
                ("P", "Potential"),
                ("E", "Energy"),
                ("M", "Mass (weight of object)"),
                ("G", "Gravity (9.8 m/s²)"),
                ("H", "Height (how high above ground)"),
            ],
            meaning: "Energy stored in an object because of its height. Higher means more energy.",
            example: "A book on a high shelf has more potential energy than one on the floor. Drop it and energy converts to motion.",
        },
    ),
    (
        "w=fd",
        FormulaContext {
            name: "Work Done",
            variables: &[
                ("W", "Work (energy transferred)"),
                ("F", "Force (push or pull)"),
                ("D", "Distance (how far moved)"),
            ],
            meaning: "Work equals force times distance. No movement means no work done.",
            example: "Pushing a box across a room: more force or more distance means more work.",
        },
    ),
    (
        "p=w/t",
        FormulaContext {
            name: "Power",
            variables: &[
                ("P", "Power (rate of work)"),
                ("W", "Work (energy used)"),
                ("T", "Time (how long)"),
            ],
            meaning: "Power is how fast work is done. Same work in less time means more power.",
            example: "Running up stairs is more powerful than walking up: same work, less time.",
        },
    ),
    (
        "s=d/t",
        FormulaContext {
            name: "Speed Formula",
            variables: &[
                ("S", "Speed (how fast)"),
                ("D", "Distance (how far)"),
                ("T", "Time (how long)"),
            ],
            meaning: "Speed equals distance divided by time.",
            example: "Car travels 100 km in 2 hours: speed is 50 km per hour.",
        },
    ),
    (
        "a=v/t",
        FormulaContext {
            name: "Acceleration",
            variables: &[
                ("A", "Acceleration (speed change)"),
                ("V", "Velocity change"),
                ("T", "Time (duration)"),
            ],
            meaning: "Acceleration is how quickly speed changes over time.",
            example: "Sports car reaches 100 km/h in 3 seconds: very high acceleration.",
        },
    ),
    (
        "h2o+co2",
        FormulaContext {
            name: "Photosynthesis Components",
            variables: &[
                ("H2O", "Water (from roots)"),
                ("CO2", "Carbon Dioxide (from air)"),
            ],
            meaning: "Water and Carbon Dioxide react with sunlight to make food for plants.",
            example: "A leaf taking in air and water to stay green.",
        },
    ),
    (
        "(a+b)2",
        FormulaContext {
            name: "Algebraic Identity (Square of Sum)",
            variables: &[
                ("A", "First number"),
                ("B", "Second number"),
                ("2", "Power of two (square)"),
            ],
            meaning: "The square of a sum equals the square of the first plus two times the product plus the square of the second.",
            example: "If a=2 and b=3, then (2+3)² = 2² + 2(2)(3) + 3² which is 25.",
        },
    ),
];

/// Explanation context for a natural key
pub fn formula_context(key: &str) -> Option<&'static FormulaContext> {
    FORMULA_CONTEXT
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, ctx)| ctx)
}
