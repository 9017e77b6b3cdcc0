//! Builds the remote-script text for each request shape.
//!
//! One builder per call shape, producing exactly what an operator would
//! type against the endpoint's shell. Builders are pure; the session
//! decides whether the text is executed, cached, or only traced.

/// Normalize a member path to carry its leading accessor dot.
pub fn normalize_member(member: &str) -> String {
    if member.starts_with('.') {
        member.to_string()
    } else {
        format!(".{member}")
    }
}

/// Script reading `member` off a namespaced object instance.
///
/// `member` must already be normalized:
/// `([wmi]"ROOT\ccm:SMS_Client=@").ClientVersion`
pub fn property_read(object_path: &str, member: &str) -> String {
    format!("([wmi]\"{object_path}\"){member}")
}

/// Script instantiating a class reference (not an instance), invoking
/// `method_call` on it, then reading `result_member` off the same
/// reference:
/// `$a=[wmiclass]"ROOT\ccm:SMS_Client";$a.GetAssignedSite().sSiteCode`
pub fn class_method_read(class_path: &str, method_call: &str, result_member: &str) -> String {
    format!("$a=[wmiclass]\"{class_path}\";$a.{method_call}{result_member}")
}

/// Script reading the object instance, assigning `literal` to `member`,
/// and committing the change remotely, in one round trip:
/// `$a=([wmi]"ROOT\ccm:SMS_Client=@");$a.AllowLocalAdminOverride=$false;$a.Put()`
pub fn property_write(object_path: &str, member: &str, literal: &str) -> String {
    format!("$a=([wmi]\"{object_path}\");$a.{member}={literal};$a.Put()")
}

/// WQL enumeration over a namespace, streaming every matching instance:
/// `get-wmiobject -query "SELECT * FROM CacheInfoEx" -namespace "root\ccm\SoftMgmtAgent"`
pub fn instance_query(namespace: &str, wql: &str) -> String {
    format!("get-wmiobject -query \"{wql}\" -namespace \"{namespace}\"")
}

/// Strip exactly one leading `$` from a literal.
///
/// Values arriving as `$false` or `$true` follow the legacy convention of
/// naming a shell variable; the cached literal is the value the variable
/// denotes, while the script keeps the original token. A de-reference
/// convention, not arithmetic.
pub fn strip_variable_prefix(literal: &str) -> &str {
    literal.strip_prefix('$').unwrap_or(literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_member_adds_missing_dot() {
        assert_eq!(normalize_member("ClientVersion"), ".ClientVersion");
        assert_eq!(normalize_member(".ClientVersion"), ".ClientVersion");
    }

    #[test]
    fn test_property_read_shape() {
        let script = property_read("ROOT\\ccm:SMS_Client=@", ".ClientVersion");
        assert_eq!(script, "([wmi]\"ROOT\\ccm:SMS_Client=@\").ClientVersion");
    }

    #[test]
    fn test_class_method_read_shape() {
        let script = class_method_read("ROOT\\ccm:SMS_Client", "GetAssignedSite()", ".sSiteCode");
        assert_eq!(
            script,
            "$a=[wmiclass]\"ROOT\\ccm:SMS_Client\";$a.GetAssignedSite().sSiteCode"
        );
    }

    #[test]
    fn test_property_write_shape() {
        let script = property_write("ROOT\\ccm:SMS_Client=@", "AllowLocalAdminOverride", "$false");
        assert_eq!(
            script,
            "$a=([wmi]\"ROOT\\ccm:SMS_Client=@\");$a.AllowLocalAdminOverride=$false;$a.Put()"
        );
    }

    #[test]
    fn test_instance_query_shape() {
        let script = instance_query("root\\ccm\\SoftMgmtAgent", "SELECT * FROM CacheInfoEx");
        assert_eq!(
            script,
            "get-wmiobject -query \"SELECT * FROM CacheInfoEx\" -namespace \"root\\ccm\\SoftMgmtAgent\""
        );
    }

    #[test]
    fn test_strip_exactly_one_prefix() {
        assert_eq!(strip_variable_prefix("$false"), "false");
        assert_eq!(strip_variable_prefix("$$nested"), "$nested");
        assert_eq!(strip_variable_prefix("false"), "false");
        assert_eq!(strip_variable_prefix(""), "");
    }
}
