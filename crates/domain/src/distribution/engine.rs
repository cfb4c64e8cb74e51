use super::{DateRange, DistributionError};
use crate::company::Company;
use crate::report::HourReport;
use crate::user::User;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// Hours one employee contributed to a company within the range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeHours {
    pub documento_id: i64,
    pub nombre: String,
    pub horas: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanySummary {
    /// Raw `cliente` value the reports were grouped by
    pub cliente: String,
    pub nombre_company: String,
    pub elemento_pep: String,
    pub total_horas: f64,
    pub empleados: Vec<EmployeeHours>,
}

/// Approved hours of a period, grouped by company and then by employee.
/// Both levels keep first-encounter order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollDistribution {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub companies: Vec<CompanySummary>,
    pub grand_total: f64,
}

/// Builds the distribution of approved hours inside `range`.
///
/// Companies are matched by `elemento_pep` and employees by `documento_id`;
/// unknown references fall back to the raw code and `Empleado <id>`.
pub fn aggregate(
    range: DateRange,
    reports: &[HourReport],
    companies: &[Company],
    users: &[User],
) -> Result<PayrollDistribution, DistributionError> {
    let mut company_by_pep: HashMap<&str, &Company> = HashMap::new();
    for company in companies {
        company_by_pep
            .entry(company.elemento_pep.as_str())
            .or_insert(company);
    }
    let mut name_by_documento: HashMap<i64, &str> = HashMap::new();
    for user in users {
        name_by_documento
            .entry(user.documento_id)
            .or_insert(user.nombre_usuario.as_str());
    }

    let mut summaries: Vec<CompanySummary> = Vec::new();
    let mut company_index: HashMap<&str, usize> = HashMap::new();
    let mut employee_index: Vec<HashMap<i64, usize>> = Vec::new();

    let approved = reports
        .iter()
        .filter(|r| r.aprobado.is_approved() && range.contains(r.effective_date()));

    for report in approved {
        let cliente = report.cliente.as_str();
        let idx = match company_index.get(cliente) {
            Some(&idx) => idx,
            None => {
                let (nombre_company, elemento_pep) = match company_by_pep.get(cliente) {
                    Some(c) => (c.nombre_company.clone(), c.elemento_pep.clone()),
                    None => (report.cliente.clone(), report.cliente.clone()),
                };
                summaries.push(CompanySummary {
                    cliente: report.cliente.clone(),
                    nombre_company,
                    elemento_pep,
                    total_horas: 0.0,
                    empleados: Vec::new(),
                });
                employee_index.push(HashMap::new());
                let idx = summaries.len() - 1;
                company_index.insert(cliente, idx);
                idx
            }
        };

        let summary = &mut summaries[idx];
        let employees = &mut employee_index[idx];
        let emp_idx = match employees.get(&report.documento_id) {
            Some(&emp_idx) => emp_idx,
            None => {
                let nombre = name_by_documento
                    .get(&report.documento_id)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| format!("Empleado {}", report.documento_id));
                summary.empleados.push(EmployeeHours {
                    documento_id: report.documento_id,
                    nombre,
                    horas: 0.0,
                });
                let emp_idx = summary.empleados.len() - 1;
                employees.insert(report.documento_id, emp_idx);
                emp_idx
            }
        };
        summary.empleados[emp_idx].horas += report.horas;
    }

    if summaries.is_empty() {
        return Err(DistributionError::NoApprovedRecords {
            from: range.from(),
            to: range.to(),
        });
    }

    for summary in &mut summaries {
        summary.total_horas = summary.empleados.iter().map(|e| e.horas).sum();
    }
    let grand_total = summaries.iter().map(|s| s.total_horas).sum();

    Ok(PayrollDistribution {
        from: range.from(),
        to: range.to(),
        companies: summaries,
        grand_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ApprovalStatus;
    use crate::report::ApprovalStatus::{Approved, Pending, Rejected};
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn january() -> DateRange {
        DateRange::new(date(2025, 1, 1), date(2025, 1, 31)).unwrap()
    }

    fn report(
        id: i32,
        cliente: &str,
        documento_id: i64,
        horas: f64,
        fecha: Option<NaiveDate>,
        aprobado: ApprovalStatus,
    ) -> HourReport {
        HourReport {
            id,
            created_at: Utc.with_ymd_and_hms(2025, 1, 20, 12, 0, 0).unwrap(),
            horas,
            fecha_trabajada: fecha,
            cliente: cliente.to_string(),
            documento_id,
            area_trabajo: None,
            aprobado,
        }
    }

    fn company(id: i32, nombre: &str, pep: &str) -> Company {
        Company {
            id,
            nombre_company: nombre.to_string(),
            elemento_pep: pep.to_string(),
        }
    }

    fn user(documento_id: i64, nombre: &str) -> User {
        User {
            id: documento_id as i32,
            documento_id,
            nombre_usuario: nombre.to_string(),
            email: None,
            rol: 1,
            password_hash: String::new(),
        }
    }

    #[test]
    fn test_single_company_single_employee() {
        let reports = vec![
            report(1, "PEP-1", 1, 5.0, Some(date(2025, 1, 10)), Approved),
            report(2, "PEP-1", 1, 3.0, Some(date(2025, 1, 11)), Approved),
            report(3, "PEP-1", 2, 4.0, Some(date(2025, 1, 11)), Pending),
        ];
        let companies = vec![company(1, "Acme", "PEP-1")];
        let users = vec![user(1, "Ana"), user(2, "Luis")];

        let dist = aggregate(january(), &reports, &companies, &users).unwrap();

        assert_eq!(dist.companies.len(), 1);
        let acme = &dist.companies[0];
        assert_eq!(acme.nombre_company, "Acme");
        assert_eq!(acme.elemento_pep, "PEP-1");
        assert_eq!(acme.total_horas, 8.0);
        assert_eq!(
            acme.empleados,
            vec![EmployeeHours {
                documento_id: 1,
                nombre: "Ana".to_string(),
                horas: 8.0
            }]
        );
        assert_eq!(dist.grand_total, 8.0);
    }

    #[test]
    fn test_excludes_unapproved_and_out_of_range() {
        let reports = vec![
            report(1, "PEP-1", 1, 2.0, Some(date(2024, 12, 31)), Approved),
            report(2, "PEP-1", 1, 2.0, Some(date(2025, 2, 1)), Approved),
            report(3, "PEP-1", 1, 2.0, Some(date(2025, 1, 15)), Rejected),
            report(4, "PEP-1", 1, 2.0, Some(date(2025, 1, 15)), Pending),
        ];

        let err = aggregate(january(), &reports, &[], &[]).unwrap_err();
        assert!(matches!(err, DistributionError::NoApprovedRecords { .. }));
    }

    #[test]
    fn test_range_bounds_are_inclusive_and_created_at_is_fallback() {
        let reports = vec![
            report(1, "PEP-1", 1, 1.0, Some(date(2025, 1, 1)), Approved),
            report(2, "PEP-1", 1, 1.0, Some(date(2025, 1, 31)), Approved),
            // created_at 2025-01-20
            report(3, "PEP-1", 1, 1.5, None, Approved),
        ];

        let dist = aggregate(january(), &reports, &[], &[]).unwrap();
        assert_eq!(dist.grand_total, 3.5);
    }

    #[test]
    fn test_fallback_names_and_first_encounter_order() {
        let reports = vec![
            report(1, "PEP-9", 7, 1.0, Some(date(2025, 1, 5)), Approved),
            report(2, "PEP-1", 3, 2.0, Some(date(2025, 1, 5)), Approved),
            report(3, "PEP-1", 1, 4.0, Some(date(2025, 1, 6)), Approved),
            report(4, "PEP-9", 7, 0.5, Some(date(2025, 1, 7)), Approved),
        ];
        let companies = vec![company(1, "Acme", "PEP-1")];

        let users = vec![user(1, "Ana")];
        let dist = aggregate(january(), &reports, &companies, &users).unwrap();

        let order: Vec<_> = dist.companies.iter().map(|c| c.cliente.as_str()).collect();
        assert_eq!(order, vec!["PEP-9", "PEP-1"]);

        let orphan = &dist.companies[0];
        assert_eq!(orphan.nombre_company, "PEP-9");
        assert_eq!(orphan.elemento_pep, "PEP-9");
        assert_eq!(orphan.empleados[0].nombre, "Empleado 7");
        assert_eq!(orphan.total_horas, 1.5);

        let acme = &dist.companies[1];
        let docs: Vec<_> = acme.empleados.iter().map(|e| e.documento_id).collect();
        assert_eq!(docs, vec![3, 1]);
        assert_eq!(acme.empleados[1].nombre, "Ana");
    }

    #[test]
    fn test_totals_are_consistent_and_repeatable() {
        let reports: Vec<_> = (0..20)
            .map(|i| {
                report(
                    i,
                    if i % 3 == 0 { "PEP-1" } else { "PEP-2" },
                    i64::from(i % 4),
                    f64::from(i % 5) + 0.5,
                    Some(date(2025, 1, 1 + (i as u32 % 28))),
                    Approved,
                )
            })
            .collect();

        let first = aggregate(january(), &reports, &[], &[]).unwrap();
        let second = aggregate(january(), &reports, &[], &[]).unwrap();
        assert_eq!(first, second);

        for summary in &first.companies {
            let sum: f64 = summary.empleados.iter().map(|e| e.horas).sum();
            assert_eq!(summary.total_horas, sum);
        }
        let total: f64 = first.companies.iter().map(|c| c.total_horas).sum();
        assert_eq!(first.grand_total, total);
    }
}
