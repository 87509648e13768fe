/*!
 * Monitoring
 * Structured logging and tracing setup
 */

mod tracer;

pub use tracer::{generate_session_id, init_tracing, span_session, CommandSpan};
