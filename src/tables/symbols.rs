//! Symbol Tables
//!
//! Greek letters, subscript digits and math/logic operators with their
//! spelled-out sign words.

pub const GREEK_LETTERS: &[(char, &str)] = &[
    ('α', "ALPHA"),
    ('β', "BETA"),
    ('γ', "GAMMA"),
    ('δ', "DELTA"),
    ('ε', "EPSILON"),
    ('θ', "THETA"),
    ('λ', "LAMBDA"),
    ('μ', "MU"),
    ('σ', "SIGMA"),
    ('τ', "TAU"),
    ('φ', "PHI"),
    ('ω', "OMEGA"),
    ('Ω', "OMEGA"),
    ('ρ', "RHO"),
    ('η', "ETA"),
    ('ν', "NU"),
];

pub const SUBSCRIPT_DIGITS: &[(char, char)] = &[
    ('₀', '0'),
    ('₁', '1'),
    ('₂', '2'),
    ('₃', '3'),
    ('₄', '4'),
    ('₅', '5'),
    ('₆', '6'),
    ('₇', '7'),
    ('₈', '8'),
    ('₉', '9'),
];

/// Operators in substitution order: multi-character symbols first
pub const MATH_OPERATORS: &[(&str, &str)] = &[
    (">=", "GREATER EQUAL"),
    ("<=", "LESS EQUAL"),
    ("!=", "NOT EQUAL"),
    ("+", "PLUS"),
    ("-", "MINUS"),
    ("*", "TIMES"),
    ("×", "TIMES"),
    ("/", "DIVIDE"),
    ("÷", "DIVIDE"),
    ("=", "EQUAL"),
    (">", "GREATER"),
    ("<", "LESS"),
    ("≠", "NOT EQUAL"),
    ("≥", "GREATER EQUAL"),
    ("≤", "LESS EQUAL"),
    ("^", "POWER"),
    ("√", "SQUARE ROOT"),
    ("π", "PI"),
    ("²", "SQUARE"),
    ("³", "CUBE"),
    ("(", "OPEN BRACKET"),
    (")", "CLOSE BRACKET"),
    ("∫", "INTEGRAL"),
    ("∑", "SUMMATION"),
    ("Σ", "SUMMATION"),
    ("Δ", "DELTA"),
    ("∞", "INFINITY"),
    ("∂", "PARTIAL"),
    ("→", "YIELDS"),
    ("⇌", "REVERSIBLE"),
    ("↔", "EQUILIBRIUM"),
];

/// Characters that mark an input as algebraic
pub const ALGEBRA_CHARS: &[char] = &['(', ')', '+', '-', '*', '/', '=', '^', '²', '³', '×', '÷'];
