pub(crate) const DEFAULT_HOST: &str = "localhost";
pub(crate) const DEFAULT_PORT: &str = "27017";
pub(crate) const DEFAULT_USERNAME: &str = "root";
pub(crate) const DEFAULT_PASSWORD: &str = "root";
pub(crate) const DEFAULT_DATABASE_NAME: &str = "contact-form";

pub(crate) const ENV_HOST: &str = "MONGO_DB_HOST";
pub(crate) const ENV_PORT: &str = "MONGO_DB_PORT";
pub(crate) const ENV_USERNAME: &str = "MONGO_DB_USERNAME";
pub(crate) const ENV_PASSWORD: &str = "MONGO_DB_PASSWORD";
pub(crate) const ENV_DATABASE_NAME: &str = "MONGO_DB_DATABASE";
