use rand::Rng;
use rand::distr::Alphanumeric;

/// Generates an opaque client-side id: a short random alphanumeric string
/// under a prefix naming what it identifies (`n-...` for nodes, `flow-...`
/// for flow records). Uniqueness within a graph is the caller's job; the
/// mutation engine regenerates on the (unlikely) collision.
pub fn fresh_id(prefix: &str) -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    format!("{}-{}", prefix, suffix)
}
