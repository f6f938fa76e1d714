//! Human-readable reporting of a search result.

use super::candidate::PetPurchase;
use crate::ga::{GaResult, Termination};
use std::fmt;

/// Flattened view of a finished search, ready to print.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub dogs: u32,
    pub cats: u32,
    pub mice: u32,
    pub total_count: u64,
    pub total_cost: f64,
    pub fitness: u32,
    pub generation_found: Option<usize>,
    pub generations: usize,
    pub termination: Termination,
}

impl Report {
    pub fn from_result(result: &GaResult<PetPurchase, u32>) -> Self {
        let best = &result.best;
        Self {
            dogs: best.dogs,
            cats: best.cats,
            mice: best.mice,
            total_count: best.total_count(),
            total_cost: best.total_cost(),
            fitness: result.best_fitness,
            generation_found: result.generation_found,
            generations: result.generations,
            termination: result.termination,
        }
    }

    /// Renders a bordered table with one row.
    ///
    /// ```text
    /// +------+------+------+-------+---------+---------+------------+
    /// | Dogs | Cats | Mice | Count | Cost    | Fitness | Generation |
    /// +------+------+------+-------+---------+---------+------------+
    /// | 3    | 41   | 56   | 100   | 100.000 | 100     | 812        |
    /// +------+------+------+-------+---------+---------+------------+
    /// ```
    pub fn table(&self) -> String {
        let headers = ["Dogs", "Cats", "Mice", "Count", "Cost", "Fitness", "Generation"];
        let cells = [
            self.dogs.to_string(),
            self.cats.to_string(),
            self.mice.to_string(),
            self.total_count.to_string(),
            format!("{:.3}", self.total_cost),
            self.fitness.to_string(),
            self.generation_label(),
        ];

        let widths: Vec<usize> = headers
            .iter()
            .zip(cells.iter())
            .map(|(h, c)| h.len().max(c.len()))
            .collect();

        let rule: String = widths
            .iter()
            .map(|w| format!("+{}", "-".repeat(w + 2)))
            .chain(std::iter::once("+".to_string()))
            .collect();
        let row = |values: &[&str]| -> String {
            values
                .iter()
                .zip(widths.iter())
                .map(|(v, &w)| format!("| {v:<w$} "))
                .chain(std::iter::once("|".to_string()))
                .collect()
        };

        let header_row = row(&headers[..]);
        let cell_refs: Vec<&str> = cells.iter().map(String::as_str).collect();
        let value_row = row(&cell_refs[..]);

        format!("{rule}\n{header_row}\n{rule}\n{value_row}\n{rule}")
    }

    fn generation_label(&self) -> String {
        match self.generation_found {
            Some(g) => g.to_string(),
            None => "-".to_string(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dogs: {}, Cats: {}, Mice: {}, Fitness: {}, Generation {}",
            self.dogs,
            self.cats,
            self.mice,
            self.fitness,
            self.generation_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved() -> GaResult<PetPurchase, u32> {
        GaResult {
            best: PetPurchase::new(3, 41, 56),
            best_fitness: 100,
            generation_found: Some(812),
            generations: 813,
            termination: Termination::Converged,
            fitness_history: vec![],
        }
    }

    #[test]
    fn test_from_result() {
        let report = Report::from_result(&solved());
        assert_eq!(report.total_count, 100);
        assert_eq!(report.total_cost, 100.0);
        assert_eq!(report.fitness, 100);
        assert_eq!(report.generations, 813);
        assert_eq!(report.termination, Termination::Converged);
    }

    #[test]
    fn test_display_line() {
        let report = Report::from_result(&solved());
        assert_eq!(
            report.to_string(),
            "Dogs: 3, Cats: 41, Mice: 56, Fitness: 100, Generation 812"
        );
    }

    #[test]
    fn test_display_degenerate() {
        let result = GaResult {
            best: PetPurchase::default(),
            best_fitness: 0,
            generation_found: None,
            generations: 10,
            termination: Termination::Exhausted,
            fitness_history: vec![0.0; 10],
        };
        let report = Report::from_result(&result);
        assert_eq!(
            report.to_string(),
            "Dogs: 0, Cats: 0, Mice: 0, Fitness: 0, Generation -"
        );
    }

    #[test]
    fn test_table() {
        let table = Report::from_result(&solved()).table();
        let expected = "\
+------+------+------+-------+---------+---------+------------+
| Dogs | Cats | Mice | Count | Cost    | Fitness | Generation |
+------+------+------+-------+---------+---------+------------+
| 3    | 41   | 56   | 100   | 100.000 | 100     | 812        |
+------+------+------+-------+---------+---------+------------+";
        assert_eq!(table, expected);
    }
}
