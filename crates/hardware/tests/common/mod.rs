//! Shared test infrastructure for the reference machine.
