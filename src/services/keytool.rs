//! Command lines for Java's `keytool`.

use crate::adapters::shell::quote;

/// Default keystore of a JRE/JDK: `<java_home>\lib\security\cacerts`.
pub fn default_keystore(java_home: &str) -> String {
    format!(r"{}\lib\security\cacerts", java_home.trim_end_matches('\\'))
}

/// `keytool.exe` invocations against one keystore.
#[derive(Debug, Clone, Copy)]
pub struct Keytool<'a> {
    java_home: &'a str,
    keystore: &'a str,
    storepass: &'a str,
}

impl<'a> Keytool<'a> {
    pub const fn new(java_home: &'a str, keystore: &'a str, storepass: &'a str) -> Self {
        Self {
            java_home,
            keystore,
            storepass,
        }
    }

    pub fn executable(&self) -> String {
        format!(r"{}\bin\keytool.exe", self.java_home.trim_end_matches('\\'))
    }

    fn base(&self, alias: &str) -> String {
        format!(
            "& {} -alias {}",
            quote(&self.executable()),
            quote(alias)
        )
    }

    fn store_args(&self) -> String {
        format!(
            "-keystore {} -storepass {}",
            quote(self.keystore),
            quote(self.storepass)
        )
    }

    /// Exits 0 only when `alias` exists in the keystore.
    pub fn list_alias(&self, alias: &str) -> String {
        format!("{} {} -list -noprompt", self.base(alias), self.store_args())
    }

    /// Imports `certificate` as a trusted entry under `alias`.
    pub fn import_certificate(&self, alias: &str, certificate: &str) -> String {
        format!(
            "{} -file {} {} -import -trustcacerts -noprompt",
            self.base(alias),
            quote(certificate),
            self.store_args()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keystore() {
        assert_eq!(default_keystore(r"C:\jre8"), r"C:\jre8\lib\security\cacerts");
        assert_eq!(default_keystore(r"C:\jre8\"), r"C:\jre8\lib\security\cacerts");
    }

    #[test]
    fn test_list_alias_command() {
        let keytool = Keytool::new(
            r"C:\Program Files\Java\jre8",
            r"C:\Program Files\Java\jre8\lib\security\cacerts",
            "changeit",
        );
        assert_eq!(
            keytool.list_alias("corp_root"),
            r"& 'C:\Program Files\Java\jre8\bin\keytool.exe' -alias 'corp_root' -keystore 'C:\Program Files\Java\jre8\lib\security\cacerts' -storepass 'changeit' -list -noprompt"
        );
    }

    #[test]
    fn test_import_command() {
        let keytool = Keytool::new(r"C:\jre8", r"D:\stores\trust.jks", "it's");
        assert_eq!(
            keytool.import_certificate("corp_root", r"C:\certs\corp root.crt"),
            r"& 'C:\jre8\bin\keytool.exe' -alias 'corp_root' -file 'C:\certs\corp root.crt' -keystore 'D:\stores\trust.jks' -storepass 'it''s' -import -trustcacerts -noprompt"
        );
    }
}
