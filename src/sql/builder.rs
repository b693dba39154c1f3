//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from static table descriptors.

use super::params::PgBindValue;

/// Table layout known at compile time. `columns` excludes the primary key.
#[derive(Debug)]
pub struct Table {
    pub name: &'static str,
    pub pk: &'static str,
    pub columns: &'static [&'static str],
}

impl Table {
    fn has_column(&self, col: &str) -> bool {
        self.columns.iter().any(|c| *c == col)
    }
}

/// Quote identifier for PostgreSQL (safe: only from table descriptors).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: PgBindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// pk first, then the data columns in declaration order.
fn select_column_list(table: &Table) -> String {
    std::iter::once(table.pk)
        .chain(table.columns.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT by primary key. Caller binds the id as $1.
pub fn select_by_id(table: &Table, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(PgBindValue::I64(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        select_column_list(table),
        quoted(table.name),
        quoted(table.pk),
        n
    );
    q
}

/// SELECT with exact-match filters, ORDER BY pk. Filters on unknown columns are ignored.
pub fn select_list(table: &Table, filters: &[(&str, PgBindValue)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::new();
    for (col, val) in filters {
        if !table.has_column(col) && *col != table.pk {
            continue;
        }
        let n = q.push_param(val.clone());
        where_parts.push(format!("{} = ${}", quoted(col), n));
    }
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    q.sql = format!(
        "SELECT {} FROM {}{} ORDER BY {}",
        select_column_list(table),
        quoted(table.name),
        where_clause,
        quoted(table.pk)
    );
    q
}

/// INSERT of the given columns; pk is generated by the database and returned with the row.
pub fn insert(table: &Table, values: Vec<(&str, PgBindValue)>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for (col, val) in values {
        if !table.has_column(col) {
            continue;
        }
        let n = q.push_param(val);
        cols.push(quoted(col));
        placeholders.push(format!("${}", n));
    }
    q.sql = if cols.is_empty() {
        format!(
            "INSERT INTO {} DEFAULT VALUES RETURNING {}",
            quoted(table.name),
            select_column_list(table)
        )
    } else {
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            quoted(table.name),
            cols.join(", "),
            placeholders.join(", "),
            select_column_list(table)
        )
    };
    q
}

/// UPDATE by id: SET only the supplied columns. Returns None when there is nothing to set.
pub fn update(table: &Table, id: i64, changes: Vec<(&str, PgBindValue)>) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for (col, val) in changes {
        if !table.has_column(col) {
            continue;
        }
        let n = q.push_param(val);
        sets.push(format!("{} = ${}", quoted(col), n));
    }
    if sets.is_empty() {
        return None;
    }
    let id_param = q.push_param(PgBindValue::I64(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        quoted(table.name),
        sets.join(", "),
        quoted(table.pk),
        id_param
    );
    Some(q)
}

/// DELETE by id. Dependent rows go with it through the foreign key's ON DELETE CASCADE.
pub fn delete(table: &Table, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(PgBindValue::I64(id));
    q.sql = format!("DELETE FROM {} WHERE {} = ${}", quoted(table.name), quoted(table.pk), n);
    q
}
