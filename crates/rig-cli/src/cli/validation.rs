/// Parse and validate a dev-server bind host.
///
/// Accepts hostnames and IP addresses; rejects empty values, whitespace,
/// URL schemes and embedded ports (use `--port` for those).
///
/// # Examples
///
/// Valid hosts: localhost, 0.0.0.0, ::1, dev.example.test
/// Invalid hosts: "", "http://localhost", "localhost:8080", "my host"
pub fn parse_host(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Host cannot be empty".to_string());
    }

    if s.contains("://") {
        return Err(format!("Host must not include a URL scheme: '{s}'"));
    }

    if s.chars().any(char::is_whitespace) {
        return Err(format!("Host cannot contain whitespace: '{s}'"));
    }

    // A single colon means host:port; IPv6 literals contain several.
    if s.matches(':').count() == 1 {
        return Err(format!("Host must not include a port, use --port instead: '{s}'"));
    }

    Ok(s.to_string())
}
