/// ACL policy types, as loaded from and stored on the coordination server.
pub mod acl;
/// Node (registered machine) types.
pub mod node;
/// Pre-authentication keys: the entity itself plus the create, list and
/// expire operations.
pub mod preauthkey;
/// Long-lived API tokens used to authenticate this console against the
/// server.
pub mod token;
/// Users (namespaces) that own nodes and auth keys.
pub mod user;
