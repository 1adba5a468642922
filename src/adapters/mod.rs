/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports: the
/// external diagnostic processes, the filesystem mapping store and the
/// console.
pub mod outbound;
