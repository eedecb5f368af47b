//! Tests for HTTP controller endpoints.
