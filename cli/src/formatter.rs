use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use geotutor::{Calculation, HintRule, Measurements, RuleCheck, Shape};

enum LineType {
    RuleRejected,
    RuleMatched,
}

impl LineType {
    fn format_line(&self, content: &str) -> String {
        let symbol = match self {
            LineType::RuleRejected => "├─ ×",
            LineType::RuleMatched => "└─>",
        };
        format!("{} {}\n", symbol, content)
    }
}

pub struct Formatter {
    decimals: usize,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Formatter {
    pub fn new(decimals: usize) -> Self {
        Self { decimals }
    }

    pub fn format_calculation(&self, calculation: &Calculation, trace: bool) -> String {
        let mut output = String::new();

        if !calculation.measurements.is_empty() {
            output.push_str(&self.format_measurements_table(&calculation.measurements));
            output.push('\n');
        }

        output.push_str(&self.format_result_table(calculation));
        output.push('\n');

        if trace {
            output.push_str(&self.format_trace(&calculation.checks));
            output.push('\n');
        }

        match calculation.hint_message() {
            Some(hint) => output.push_str(&format!("Hint: {}\n", hint)),
            None => output.push_str("Great job! Your inputs look correct.\n"),
        }
        output.push_str("Keep practicing geometry, you're doing awesome!\n");

        output
    }

    fn format_measurements_table(&self, measurements: &Measurements) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Field").set_alignment(CellAlignment::Left),
            Cell::new("Value").set_alignment(CellAlignment::Left),
        ]));

        for (field, value) in measurements.iter() {
            table.add_row(Row::from(vec![field.label().to_string(), value.to_string()]));
        }

        table.to_string()
    }

    fn format_result_table(&self, calculation: &Calculation) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);

        table.add_row(Row::from(vec![Cell::new(format!(
            "Shape: {}",
            calculation.shape
        ))]));
        table.add_row(Row::from(vec![Cell::new(format!(
            "{}\n= {}",
            calculation.formulas.area,
            calculation.area_display(self.decimals)
        ))]));
        table.add_row(Row::from(vec![Cell::new(format!(
            "{}\n= {}",
            calculation.formulas.perimeter,
            calculation.perimeter_display(self.decimals)
        ))]));

        table.to_string()
    }

    fn format_trace(&self, checks: &[RuleCheck]) -> String {
        let mut output = String::from("Hint rules checked:\n");
        for check in checks {
            let line = if check.matched {
                LineType::RuleMatched
            } else {
                LineType::RuleRejected
            };
            output.push_str(&line.format_line(&format!(
                "{} ({})",
                rule_name(check.rule),
                check.rule.description()
            )));
        }
        output
    }

    pub fn format_shapes(&self) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec!["Shape", "Fields", "Area", "Perimeter"]));

        for shape in Shape::ALL {
            let fields = shape
                .fields()
                .iter()
                .map(|f| f.key())
                .collect::<Vec<_>>()
                .join(", ");
            let formulas = shape.formulas();
            table.add_row(Row::from(vec![
                shape.name().to_string(),
                fields,
                formulas.area.to_string(),
                formulas.perimeter.to_string(),
            ]));
        }

        let mut output = table.to_string();
        output.push('\n');
        output
    }
}

fn rule_name(rule: HintRule) -> &'static str {
    match rule {
        HintRule::NonPositive => "non_positive",
        HintRule::ShapeMismatch => "shape_mismatch",
        HintRule::OversizedSquare => "oversized_square",
        HintRule::DiameterConfusion => "diameter_confusion",
        HintRule::SquareRectangle => "square_rectangle",
        HintRule::TriangleInequality => "triangle_inequality",
    }
}
