//! STEM concept keywords and question openers that mark an input as
//! worth an explanation.

pub const STEM_CONCEPTS: &[&str] = &[
    // Biology & environment
    "photosynthesis",
    "mitosis",
    "meiosis",
    "global warming",
    "greenhouse effect",
    "evolution",
    "dna",
    "rna",
    "atom",
    "molecule",
    "cell",
    "newton's laws",
    "periodic table",
    "acid rain",
    "refraction",
    "reflection",
    "osmosis",
    "diffusion",
    "ecosystem",
    "food chain",
    "respiration",
    "evaporation",
    "condensation",
    "precipitation",
    "chlorophyll",
    "organelle",
    "prokaryote",
    "eukaryote",
    "genetics",
    "mutation",
    "habitat",
    "biodiversity",
    "pollination",
    "digestion",
    "circulation",
    "nervous system",
    "blood",
    "heart",
    "oxygen",
    "carbon",
    "nature",
    "science",
    "biology",
    "animal",
    "plant",
    // Physics & astronomy
    "gravity",
    "electricity",
    "magnetism",
    "friction",
    "energy",
    "matter",
    "acceleration",
    "velocity",
    "inertia",
    "momentum",
    "torque",
    "centripetal",
    "electromagnetic",
    "spectrum",
    "quantum",
    "relativity",
    "conduction",
    "convection",
    "radiation",
    "supernova",
    "black hole",
    "galaxy",
    "nebula",
    "orbit",
    "telescope",
    "wavelength",
    "frequency",
    "amplitude",
    "resonance",
    "entropy",
    "thermodynamics",
    "physics",
    "light",
    "sound",
    "heat",
    "force",
    "power",
    "motion",
    // Chemistry
    "isotope",
    "ion",
    "catalyst",
    "covalent",
    "ionic",
    "metallic",
    "bond",
    "solubility",
    "titration",
    "distillation",
    "chromatography",
    "exothermic",
    "endothermic",
    "oxidation",
    "reduction",
    "alkali",
    "halogen",
    "noble gas",
    "polymer",
    "isomer",
    "sublimation",
    "viscosity",
    "electrolysis",
    "stoichiometry",
    "suspension",
    "colloid",
    "chemistry",
    "reaction",
    "acid",
    "base",
    "salt",
    "element",
    "compound",
    "mixture",
    // Math & general
    "calculus",
    "trigonometry",
    "geometry",
    "algebra",
    "statistics",
    "probability",
    "derivative",
    "integral",
    "theorem",
    "logarithm",
    "matrix",
    "vector",
    "scalar",
    "algorithm",
    "circuit",
    "robotics",
    "nanotechnology",
    "semiconductor",
    "pigeonhole",
    "fractal",
    "fibonacci",
    "pythagorean",
    "differential",
    "sine",
    "cosine",
    "math",
    "formula",
    "equation",
    "logic",
    "reasoning",
];

pub const QUESTION_OPENERS: &[&str] = &["what", "how", "explain", "tell me about", "define"];
