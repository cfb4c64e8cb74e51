//! Spreadsheet export of a [`PayrollDistribution`].

use super::PayrollDistribution;

pub const CSV_HEADER: &str =
    "Empresa,Elemento PEP,Total Horas,Documento Empleado,Nombre Empleado,Horas Empleado";

const BOM: char = '\u{feff}';

impl PayrollDistribution {
    /// Renders the distribution as UTF-8 CSV, BOM-prefixed and `\n` separated.
    ///
    /// Company name, code and total appear only on the first employee row of
    /// each company, and every company block is followed by a blank line.
    pub fn to_csv(&self) -> String {
        let mut lines = vec![CSV_HEADER.to_string()];

        for company in &self.companies {
            for (idx, emp) in company.empleados.iter().enumerate() {
                let (nombre, pep, total) = if idx == 0 {
                    (
                        quote(&company.nombre_company),
                        quote(&company.elemento_pep),
                        company.total_horas.to_string(),
                    )
                } else {
                    (String::new(), String::new(), String::new())
                };
                lines.push(format!(
                    "{},{},{},{},{},{}",
                    nombre,
                    pep,
                    total,
                    emp.documento_id,
                    quote(&emp.nombre),
                    emp.horas
                ));
            }
            lines.push(String::new());
        }

        lines.push(format!("TOTAL GENERAL,,,,,{}", self.grand_total));

        let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum::<usize>() + 3);
        out.push(BOM);
        out.push_str(&lines.join("\n"));
        out
    }

    pub fn file_name(&self) -> String {
        format!("reporte_horas_{}_a_{}.csv", self.from, self.to)
    }
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::{CompanySummary, EmployeeHours};
    use chrono::NaiveDate;

    fn distribution() -> PayrollDistribution {
        PayrollDistribution {
            from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            companies: vec![
                CompanySummary {
                    cliente: "PEP-1".to_string(),
                    nombre_company: "Acme \"Norte\"".to_string(),
                    elemento_pep: "PEP-1".to_string(),
                    total_horas: 10.5,
                    empleados: vec![
                        EmployeeHours {
                            documento_id: 1,
                            nombre: "Ana".to_string(),
                            horas: 8.0,
                        },
                        EmployeeHours {
                            documento_id: 2,
                            nombre: "Luis".to_string(),
                            horas: 2.5,
                        },
                    ],
                },
                CompanySummary {
                    cliente: "PEP-2".to_string(),
                    nombre_company: "Beta".to_string(),
                    elemento_pep: "PEP-2".to_string(),
                    total_horas: 4.0,
                    empleados: vec![EmployeeHours {
                        documento_id: 3,
                        nombre: "Empleado 3".to_string(),
                        horas: 4.0,
                    }],
                },
            ],
            grand_total: 14.5,
        }
    }

    #[test]
    fn test_csv_layout() {
        let csv = distribution().to_csv();
        assert!(csv.starts_with('\u{feff}'));

        let lines: Vec<&str> = csv.trim_start_matches('\u{feff}').split('\n').collect();
        assert_eq!(
            lines,
            vec![
                CSV_HEADER,
                "\"Acme \"\"Norte\"\"\",\"PEP-1\",10.5,1,\"Ana\",8",
                ",,,2,\"Luis\",2.5",
                "",
                "\"Beta\",\"PEP-2\",4,3,\"Empleado 3\",4",
                "",
                "TOTAL GENERAL,,,,,14.5",
            ]
        );
    }

    #[test]
    fn test_file_name_uses_range() {
        assert_eq!(
            distribution().file_name(),
            "reporte_horas_2025-01-01_a_2025-01-31.csv"
        );
    }
}
