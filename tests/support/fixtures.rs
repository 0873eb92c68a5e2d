//! Test fixtures and constants.

/// Environment every scenario runs against.
pub const ENV: &str = "production";

/// Plaintext with comments, quoting and blank lines.
pub const SAMPLE_ENV: &str = r#"# database
DATABASE_URL="postgres://localhost/app"
REDIS_URL=redis://localhost:6379

# api
API_KEY='sk-test-12345'
"#;

/// A fake dotenvx for CLI tests.
///
/// Wraps values as `"encrypted:<value>"` and unwraps them again. Only the
/// argument layout matters: `<op> -f <file> -fk <key file>`.
pub const FAKE_DOTENVX: &str = r#"#!/bin/sh
op="$1"
file="$3"
key="$5"
case "$op" in
  encrypt)
    mkdir -p "$(dirname "$key")"
    [ -f "$key" ] || echo 'DOTENV_PRIVATE_KEY="fake"' > "$key"
    awk '/^[A-Za-z_][A-Za-z0-9_]*=/ && $0 !~ /^DOTENV_/ && $0 !~ /="?encrypted:/ {
      k = $0; sub(/=.*/, "", k); v = $0; sub(/^[^=]*=/, "", v)
      print k "=\"encrypted:" v "\""; next
    } { print }' "$file" > "$file.tmp" && mv "$file.tmp" "$file"
    ;;
  decrypt)
    [ -f "$key" ] || { echo "missing private key" >&2; exit 1; }
    sed 's/="encrypted:\(.*\)"$/=\1/' "$file" > "$file.tmp" && mv "$file.tmp" "$file"
    ;;
  *)
    echo "unknown command $op" >&2
    exit 2
    ;;
esac
"#;
