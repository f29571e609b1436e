use serde_yaml::{Mapping, Value};

use crate::document::{child_mapping, copy_renamed, empty_string, key};
use crate::error::Result;

/// Top-level scalars that keep their name and position in the new schema.
const DIRECT_FIELDS: [&str; 7] = [
    "enableLeaderElection",
    "leaderElectionID",
    "prometheusAPI",
    "host",
    "serverAddr",
    "metricsAddr",
    "probeAddr",
];

/// Top-level TLS/pull secrets that move under `secrets` unchanged.
const SECRET_FIELDS: [&str; 3] = ["tlsSecretName", "tlsForwardSecretName", "imagePullSecretName"];

/// Old `act.image` field -> new `imageRegistry` field.
const IMAGE_REGISTRY_FIELDS: [(&str, &str); 6] = [
    ("registryServer", "server"),
    ("registryUser", "user"),
    ("registryPass", "password"),
    ("registryProject", "project"),
    ("registryAdmin", "admin"),
    ("registryAdminPass", "adminPassword"),
];

/// `dindArgs` images, same names in `imageBuildTools`.
const IMAGE_BUILD_TOOL_FIELDS: [&str; 3] = ["buildxImage", "nerdctlImage", "envdImage"];

/// `act.auth` LDAP fields, same names in `raidsLab.ldap`.
const LDAP_FIELDS: [&str; 4] = ["userName", "password", "address", "searchDN"];

/// Convert a legacy config document into the grouped schema.
///
/// The input is never mutated; the returned mapping owns its whole tree.
/// Unknown legacy keys are dropped and absent keys are skipped. The only
/// error is a traversed anchor (`act`, `act.auth`, `act.image`,
/// `workspace`, `dindArgs`) holding something other than a mapping.
///
/// Insertion order below is the order keys appear in the written file.
pub fn migrate(old: &Mapping) -> Result<Mapping> {
    let act = child_mapping(old, "act", "act")?;
    let act_auth = match act {
        Some(act) => child_mapping(act, "auth", "act.auth")?,
        None => None,
    };
    let workspace = child_mapping(old, "workspace", "workspace")?;

    let mut new = Mapping::new();

    for field in DIRECT_FIELDS {
        copy_renamed(old, field, &mut new, field);
    }
    copy_renamed(old, "postgres", &mut new, "postgres");

    new.insert(key("auth"), Value::Mapping(auth_section(act_auth)));
    new.insert(key("storage"), Value::Mapping(storage_section(old, workspace)));
    new.insert(key("workspace"), Value::Mapping(workspace_section(workspace)));
    new.insert(key("secrets"), Value::Mapping(secrets_section(old)));

    if let Some(act) = act {
        if let Some(image) = child_mapping(act, "image", "act.image")? {
            new.insert(key("imageRegistry"), Value::Mapping(image_registry_section(image)));
        }
    }
    if let Some(dind) = child_mapping(old, "dindArgs", "dindArgs")? {
        new.insert(key("imageBuildTools"), Value::Mapping(image_build_tools_section(dind)));
    }
    if let Some(act) = act {
        copy_renamed(act, "smtp", &mut new, "smtp");
    }

    new.insert(key("raidsLab"), Value::Mapping(raids_lab_section(act, act_auth)));
    copy_renamed(old, "schedulerPlugins", &mut new, "schedulerPlugins");

    Ok(new)
}

fn auth_section(act_auth: Option<&Mapping>) -> Mapping {
    let mut auth = Mapping::new();
    if let Some(src) = act_auth {
        copy_renamed(src, "accessTokenSecret", &mut auth, "accessTokenSecret");
        copy_renamed(src, "refreshTokenSecret", &mut auth, "refreshTokenSecret");
    }
    auth
}

/// `prefix` is always present, even when no legacy prefix keys were set.
fn storage_section(old: &Mapping, workspace: Option<&Mapping>) -> Mapping {
    let mut prefix = Mapping::new();
    copy_renamed(old, "userSpacePrefix", &mut prefix, "user");
    copy_renamed(old, "accountSpacePrefix", &mut prefix, "account");
    copy_renamed(old, "publicSpacePrefix", &mut prefix, "public");

    let mut storage = Mapping::new();
    storage.insert(key("prefix"), Value::Mapping(prefix));
    if let Some(ws) = workspace {
        copy_renamed(ws, "rwxpvcName", &mut storage, "rwxpvcName");
        copy_renamed(ws, "roxpvcName", &mut storage, "roxpvcName");
    }
    storage
}

fn workspace_section(workspace: Option<&Mapping>) -> Mapping {
    let mut section = Mapping::new();
    if let Some(ws) = workspace {
        copy_renamed(ws, "namespace", &mut section, "namespace");
        copy_renamed(ws, "imageNameSpace", &mut section, "imageNameSpace");
    }
    section
}

fn secrets_section(old: &Mapping) -> Mapping {
    let mut secrets = Mapping::new();
    for field in SECRET_FIELDS {
        copy_renamed(old, field, &mut secrets, field);
    }
    secrets
}

/// Every registry field is present in the output, empty when unset.
fn image_registry_section(image: &Mapping) -> Mapping {
    let mut registry = Mapping::new();
    for (old_field, new_field) in IMAGE_REGISTRY_FIELDS {
        let value = image.get(old_field).cloned().unwrap_or_else(empty_string);
        registry.insert(key(new_field), value);
    }
    registry
}

fn image_build_tools_section(dind: &Mapping) -> Mapping {
    let mut tools = Mapping::new();
    for field in IMAGE_BUILD_TOOL_FIELDS {
        let value = dind.get(field).cloned().unwrap_or_else(empty_string);
        tools.insert(key(field), value);
    }
    tools
}

/// `ldap` and `openAPI` are inserted first and keep their slots when
/// later filled or replaced.
fn raids_lab_section(act: Option<&Mapping>, act_auth: Option<&Mapping>) -> Mapping {
    let mut raids = Mapping::new();
    raids.insert(key("ldap"), Value::Mapping(Mapping::new()));
    raids.insert(key("openAPI"), Value::Mapping(Mapping::new()));

    if let Some(act) = act {
        copy_renamed(act, "strictRegisterMode", &mut raids, "enable");
        copy_renamed(act, "uidServerURL", &mut raids, "uidServerURL");
        copy_renamed(act, "openAPI", &mut raids, "openAPI");
    }

    if let Some(auth) = act_auth {
        let mut ldap = Mapping::new();
        for field in LDAP_FIELDS {
            copy_renamed(auth, field, &mut ldap, field);
        }
        raids.insert(key("ldap"), Value::Mapping(ldap));
    }

    raids
}
