//! Shared test infrastructure for the monitor.
