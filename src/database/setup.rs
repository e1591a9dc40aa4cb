use log::debug;

use crate::errors::StoreError;

use super::connection::DbConn;

pub fn ensure_schema(conn: &mut DbConn) -> Result<(), StoreError> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for statement in &statements {
        execute_sql(conn, statement)?;
    }

    debug!("Ladder schema ready ({} statements)", statements.len());
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(strip_comments)
        .filter(|s| !s.is_empty())
        .collect()
}

fn strip_comments(statement: &str) -> String {
    statement
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn execute_sql(conn: &mut DbConn, sql: &str) -> Result<(), StoreError> {
    conn.execute(sql, [])?;
    Ok(())
}
