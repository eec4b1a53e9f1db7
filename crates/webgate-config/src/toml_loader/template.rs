//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Webgate Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[scheme]
# name = "x-local"        # private scheme, requests are served from [resources]
# cors_origin = "*"

[resources]
# asset_root = "/path/to/app"   # base directory for "~/" paths below

[resources.entries]
# "index.html" = "~/www/index.html"
# "logo.png" = "/opt/app/assets/logo.png"

[navigation]
# blocked_prefixes = ["https://ads.example.com/"]
# start_url = "x-local://index.html"

[logging]
# level = "info"          # trace, debug, info, warn, error
"##
    .to_string()
}
