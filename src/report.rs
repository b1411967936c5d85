//! Console lines printed for each way a registration can end.

use crate::auth::{ADMIN_ROLE, DEFAULT_ROLE, RegistrationOutcome, role_update_statement};
use crate::errors::{Error, chain};
use std::io::{self, Write};

pub fn step<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Step 1: Registering test user...")
}

pub fn outcome<W: Write>(out: &mut W, outcome: &RegistrationOutcome) -> io::Result<()> {
    match outcome {
        RegistrationOutcome::Created { user_id, jwt } => {
            writeln!(out, "✅ User created with ID: {user_id}")?;
            writeln!(out, "📝 JWT Token: {jwt}")?;

            writeln!(out, "\n⚠️  Note: User role is '{DEFAULT_ROLE}' by default")?;
            writeln!(out, "To make this user a {ADMIN_ROLE}, update the database:")?;
            writeln!(out, "{}", role_update_statement(user_id))
        }
        RegistrationOutcome::Rejected { status, body } => {
            writeln!(out, "❌ Registration failed: {status}")?;
            writeln!(out, "{body}")
        }
    }
}

pub fn error<W: Write>(out: &mut W, err: &Error) -> io::Result<()> {
    writeln!(out, "❌ Error: {}", chain(err))
}
