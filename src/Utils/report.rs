use crate::numerical::root_isolation::RootBracket;
use crate::quadrature::gauss_laguerre::QuadratureRule;
use csv::Writer;
use std::fs::File;
use std::io::{self, Write};
use tabled::{builder::Builder, settings::Style};

/// Number / Abscissa / Weight table of an n-point rule, 4 decimal places.
/// The scaled-weight column carries w_i * e^(x_i), the form used when the
/// integrand does not contain the e^(-x) factor itself.
pub fn rule_table(rule: &QuadratureRule) -> String {
    let scaled = rule.scaled_weights();
    let mut builder = Builder::default();
    builder.push_record(["Number", "Abscissa", "Weight", "Scaled weight"]);
    for (i, (x, w)) in rule.abscissas.iter().zip(rule.weights.iter()).enumerate() {
        builder.push_record([
            format!("{}", i + 1),
            format!("{:.4}", x),
            format!("{:.4}", w),
            format!("{:.4}", scaled[i]),
        ]);
    }
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}

/// Num / StartInterval / EndInterval table of the isolating brackets.
pub fn brackets_table(brackets: &[RootBracket]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Num", "StartInterval", "EndInterval"]);
    for (i, bracket) in brackets.iter().enumerate() {
        builder.push_record([
            format!("{}", i + 1),
            format!("{:.4}", bracket.start),
            format!("{:.4}", bracket.end),
        ]);
    }
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}

/// Save a rule as a tab-separated text file, one node per row.
pub fn save_rule_to_file(rule: &QuadratureRule, filename: &str) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "abscissa\tweight")?;
    for (x, w) in rule.abscissas.iter().zip(rule.weights.iter()) {
        writeln!(file, "{}\t{}", x, w)?;
    }
    Ok(())
}

/// Save a rule as a CSV file, one node per row.
pub fn save_rule_to_csv(rule: &QuadratureRule, filename: &str) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);
    writer.write_record(["abscissa", "weight"])?;
    for (x, w) in rule.abscissas.iter().zip(rule.weights.iter()) {
        writer.write_record(&[x.to_string(), w.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
