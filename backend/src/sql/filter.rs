//! `WHERE` clause generation for job and company searches.
//!
//! Filters are assembled from an ordered list of optional predicates. Only
//! predicates that carry a value consume a placeholder, and placeholders are
//! numbered in declaration order, so a literal predicate (such as
//! `equity > 0`) never shifts the numbering of the values around it.
//!
//! The builders trust the types they are handed. Malformed input is the
//! request layer's job to reject; anything that slips through surfaces as a
//! database error at execution time.

use serde_json::Value;

use super::SqlFragment;

/// One condition of a `WHERE` clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `<column> <op> $n`, bound to `value`.
    Bound {
        column: &'static str,
        op: &'static str,
        value: Value,
    },
    /// Fixed SQL with no placeholder.
    Literal(&'static str),
}

impl Predicate {
    pub fn bound(column: &'static str, op: &'static str, value: impl Into<Value>) -> Self {
        Predicate::Bound {
            column,
            op,
            value: value.into(),
        }
    }
}

/// Folds the active predicates into a `WHERE` clause.
///
/// Inactive entries (`None`) are skipped. With no active predicates the
/// clause is empty rather than a bare `WHERE`.
pub fn assemble_where<I>(predicates: I) -> SqlFragment
where
    I: IntoIterator<Item = Option<Predicate>>,
{
    let (conditions, values) = predicates.into_iter().flatten().fold(
        (Vec::new(), Vec::new()),
        |(mut conditions, mut values): (Vec<String>, Vec<Value>), predicate| {
            match predicate {
                Predicate::Bound { column, op, value } => {
                    values.push(value);
                    conditions.push(format!("{} {} ${}", column, op, values.len()));
                }
                Predicate::Literal(sql) => conditions.push(sql.to_string()),
            }
            (conditions, values)
        },
    );

    let clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    SqlFragment { clause, values }
}

/// Wraps non-empty text in `%...%` for a substring match.
fn contains_pattern(text: Option<&str>) -> Option<String> {
    text.filter(|t| !t.is_empty()).map(|t| format!("%{}%", t))
}

/// Search criteria for `GET /api/jobs`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilter {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    /// Inclusive salary floor.
    pub min_salary: Option<i64>,
    /// Only jobs with `equity > 0`.
    pub has_equity: bool,
}

impl JobFilter {
    pub fn to_fragment(&self) -> SqlFragment {
        build_job_filter(self.title.as_deref(), self.min_salary, self.has_equity)
    }
}

/// Builds the job search clause: title, then salary floor, then equity flag.
pub fn build_job_filter(
    title: Option<&str>,
    min_salary: Option<i64>,
    has_equity: bool,
) -> SqlFragment {
    assemble_where([
        contains_pattern(title).map(|p| Predicate::bound("title", "ILIKE", p)),
        min_salary.map(|s| Predicate::bound("salary", ">=", s)),
        has_equity.then_some(Predicate::Literal("equity > 0")),
    ])
}

/// Search criteria for `GET /api/companies`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyFilter {
    /// Case-insensitive substring of the company name.
    pub name_like: Option<String>,
    pub min_employees: Option<i64>,
    pub max_employees: Option<i64>,
}

impl CompanyFilter {
    pub fn to_fragment(&self) -> SqlFragment {
        build_company_filter(
            self.name_like.as_deref(),
            self.min_employees,
            self.max_employees,
        )
    }
}

/// Builds the company search clause: name, then employee floor and ceiling.
pub fn build_company_filter(
    name_like: Option<&str>,
    min_employees: Option<i64>,
    max_employees: Option<i64>,
) -> SqlFragment {
    assemble_where([
        contains_pattern(name_like).map(|p| Predicate::bound("name", "ILIKE", p)),
        min_employees.map(|n| Predicate::bound("num_employees", ">=", n)),
        max_employees.map(|n| Predicate::bound("num_employees", "<=", n)),
    ])
}
