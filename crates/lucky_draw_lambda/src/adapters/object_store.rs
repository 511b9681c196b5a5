/// String-keyed blob backend holding the persisted stock snapshot.
///
/// `read_object` distinguishes an absent key (`Ok(None)`) from a backend
/// failure so callers can apply different recovery policies to each.
pub trait ObjectStore {
    fn read_object(&self, key: &str) -> Result<Option<Vec<u8>>, String>;
    fn write_object(&self, key: &str, body: &[u8]) -> Result<(), String>;
}
