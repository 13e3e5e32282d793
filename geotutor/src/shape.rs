use crate::TutorError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The closed set of shapes the tutor knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Square,
    Rectangle,
    Triangle,
    Circle,
}

/// A named measurement a shape requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Side,
    Length,
    Width,
    Base,
    Height,
    Side1,
    Side2,
    Side3,
    Radius,
}

/// Human-readable formula descriptions shown next to a computed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormulaText {
    pub area: &'static str,
    pub perimeter: &'static str,
}

const SQUARE_FIELDS: &[Field] = &[Field::Side];
const RECTANGLE_FIELDS: &[Field] = &[Field::Length, Field::Width];
const TRIANGLE_FIELDS: &[Field] = &[
    Field::Base,
    Field::Height,
    Field::Side1,
    Field::Side2,
    Field::Side3,
];
const CIRCLE_FIELDS: &[Field] = &[Field::Radius];

impl Shape {
    pub const ALL: [Shape; 4] = [
        Shape::Square,
        Shape::Rectangle,
        Shape::Triangle,
        Shape::Circle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Square => "Square",
            Shape::Rectangle => "Rectangle",
            Shape::Triangle => "Triangle",
            Shape::Circle => "Circle",
        }
    }

    /// Fields required by this shape, in the order a form presents them
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Shape::Square => SQUARE_FIELDS,
            Shape::Rectangle => RECTANGLE_FIELDS,
            Shape::Triangle => TRIANGLE_FIELDS,
            Shape::Circle => CIRCLE_FIELDS,
        }
    }

    pub fn requires(&self, field: Field) -> bool {
        self.fields().contains(&field)
    }

    pub fn formulas(&self) -> FormulaText {
        match self {
            Shape::Square => FormulaText {
                area: "Area = side × side",
                perimeter: "Perimeter = 4 × side",
            },
            Shape::Rectangle => FormulaText {
                area: "Area = length × width",
                perimeter: "Perimeter = 2 × (length + width)",
            },
            Shape::Triangle => FormulaText {
                area: "Area = ½ × base × height",
                perimeter: "Perimeter = side1 + side2 + side3",
            },
            Shape::Circle => FormulaText {
                area: "Area = π × radius²",
                perimeter: "Circumference = 2 × π × radius",
            },
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Shape {
    type Err = TutorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TutorError::UnknownShape(trimmed.to_string()))
    }
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Side,
        Field::Length,
        Field::Width,
        Field::Base,
        Field::Height,
        Field::Side1,
        Field::Side2,
        Field::Side3,
        Field::Radius,
    ];

    /// The key used in `name=value` input
    pub fn key(&self) -> &'static str {
        match self {
            Field::Side => "side",
            Field::Length => "length",
            Field::Width => "width",
            Field::Base => "base",
            Field::Height => "height",
            Field::Side1 => "side1",
            Field::Side2 => "side2",
            Field::Side3 => "side3",
            Field::Radius => "radius",
        }
    }

    /// The label shown to learners
    pub fn label(&self) -> &'static str {
        match self {
            Field::Side => "Side length",
            Field::Length => "Length",
            Field::Width => "Width",
            Field::Base => "Base",
            Field::Height => "Height",
            Field::Side1 => "Side 1",
            Field::Side2 => "Side 2",
            Field::Side3 => "Side 3",
            Field::Radius => "Radius",
        }
    }

    /// Look up a field by key. Case-insensitive; `side_1` and `side 1` are accepted for `side1`.
    pub fn from_key(key: &str) -> Option<Field> {
        let normalized: String = key
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != ' ')
            .collect::<String>()
            .to_ascii_lowercase();
        Field::ALL.into_iter().find(|f| f.key() == normalized)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
