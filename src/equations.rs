use crate::{
    algebra::{self, BinaryOperation},
    config::{ChainPolicy, CheckerConfig},
    verdict::{Rejection, Verdict},
};

/// The character separating the sides of an equation.
pub const EQUALITY: char = '=';

/// Character sequences for operators the game doesn't support.
const UNSUPPORTED_OPERATORS: &[&str] = &["**", "//", "^", "%"];

/// Check a sequence of tiles using the default [`CheckerConfig`].
///
/// ```rust
/// let verdict = tile_equations::check_equation(&["1", "2", "+", "3", "=", "1", "5"]);
///
/// assert!(verdict.is_valid());
/// assert_eq!(verdict.right(), Some(15.0));
/// ```
pub fn check_equation<I, S>(tiles: I) -> Verdict
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Checker::default().check(tiles)
}

/// Decides whether an arrangement of tiles forms a true equation.
///
/// A `Checker` holds no state besides its configuration, so one can be shared
/// freely between threads.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Checker {
    config: CheckerConfig,
}

impl Checker {
    pub fn new(config: CheckerConfig) -> Self { Checker { config } }

    pub fn config(&self) -> &CheckerConfig { &self.config }

    /// Check a sequence of tiles.
    ///
    /// Tile boundaries carry no meaning, so `["1", "2"]` is read as `12`.
    pub fn check<I, S>(&self, tiles: I) -> Verdict
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: String =
            tiles.into_iter().map(|tile| tile.as_ref().to_owned()).collect();

        self.check_str(&raw)
    }

    /// Check an equation which has already been joined into a single string.
    pub fn check_str(&self, raw: &str) -> Verdict {
        let equation = self.config.glyphs.substitute(raw).into_owned();

        let verdict = match self.evaluate_sides(&equation) {
            Ok(values) => Verdict::Valid { equation, values },
            Err(rejection) => Verdict::Invalid(rejection),
        };

        log::debug!("Checked \"{}\": {}", raw, verdict);
        verdict
    }

    fn evaluate_sides(&self, equation: &str) -> Result<Vec<f64>, Rejection> {
        let sides: Vec<&str> = equation.split(EQUALITY).collect();

        if sides.len() < 2 {
            return Err(Rejection::MissingEquality);
        }
        if self.config.chain == ChainPolicy::ExactlyTwo && sides.len() > 2 {
            return Err(Rejection::ChainedEquality { sides: sides.len() });
        }
        if sides.iter().any(|side| side.trim().is_empty()) {
            return Err(Rejection::EmptySide);
        }

        for side in &sides {
            check_structure(side)?;
        }

        let values = sides
            .iter()
            .map(|side| {
                algebra::evaluate_expression_with(
                    side,
                    self.config.division_epsilon,
                )
            })
            .collect::<Result<Vec<f64>, _>>()?;

        let expected = values[0];

        for &found in &values[1..] {
            if !self.config.values_match(expected, found) {
                return Err(Rejection::ValueMismatch { expected, found });
            }
        }

        Ok(values)
    }
}

/// Cheap textual checks applied to one side before it is tokenized.
fn check_structure(side: &str) -> Result<(), Rejection> {
    let compact: String = side.chars().filter(|c| !c.is_whitespace()).collect();

    if let Some(operator) = UNSUPPORTED_OPERATORS
        .iter()
        .find(|operator| compact.contains(*operator))
    {
        return Err(Rejection::UnsupportedOperator {
            operator: operator.to_string(),
        });
    }

    let mut previous_was_operator = false;

    for c in compact.chars() {
        let is_operator = BinaryOperation::is_operator_char(c);

        if is_operator && previous_was_operator {
            return Err(Rejection::MalformedOperatorRun);
        }

        previous_was_operator = is_operator;
    }

    Ok(())
}
