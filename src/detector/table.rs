//! Built-in language definitions for weighted scoring detection
//!
//! Specific formats (Dockerfile, Compose, Kubernetes, Nginx) carry higher
//! priorities and rarer, heavier rules. General formats (YAML, JSON, INI)
//! score on frequent low-weight signals so they only win when nothing more
//! specific fires. Overlaps are settled by score, then priority.
//!
//! Patterns use `regex` syntax; the few that need look-around are compiled
//! with `fancy-regex` instead.

use super::rules::{LanguageDefinition, Rule};
use crate::language::LanguageId;

// ----------------------------------------------------------------------------
// Containers / orchestration / infrastructure
// ----------------------------------------------------------------------------

pub static DOCKERFILE: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Dockerfile,
    aliases: &["Dockerfile", "docker", "containerfile"],
    priority: 100,
    min_score: 20,
    // Instructions are matched upper-case only so `from x import y` stays Python
    rules: &[
        Rule::new("df.from", r"(?m)^\s*FROM\s+[\w./:-]+", 12).capped(3).note("FROM image"),
        Rule::new("df.run", r"(?m)^\s*RUN\s+", 6).capped(6),
        Rule::new("df.copy_add", r"(?m)^\s*(COPY|ADD)\s+", 8).capped(4),
        Rule::new("df.cmd_entry", r"(?m)^\s*(CMD|ENTRYPOINT)\s+", 10).capped(2),
        Rule::new("df.arg_env", r"(?m)^\s*(ARG|ENV)\s+[A-Za-z0-9_]+", 6).capped(4),
        Rule::new("df.workdir", r"(?m)^\s*WORKDIR\s+", 6).capped(2),
        Rule::new("df.expose", r"(?m)^\s*EXPOSE\s+\d+", 5).capped(2),
        Rule::new("df.meta", r"(?m)^\s*(LABEL|HEALTHCHECK|USER|VOLUME|SHELL)\s+", 3).capped(4),
    ],
};

pub static DOCKER_COMPOSE: LanguageDefinition = LanguageDefinition {
    id: LanguageId::DockerCompose,
    aliases: &[
        "compose",
        "compose.yml",
        "compose.yaml",
        "docker-compose.yml",
        "docker-compose.yaml",
    ],
    priority: 95,
    min_score: 22,
    rules: &[
        Rule::new("dc.services", r"(?mi)^\s*services\s*:\s*$", 14).capped(1),
        Rule::new("dc.image", r#"(?mi)^\s*image\s*:\s*["']?[\w./:-]+"#, 8).capped(5),
        Rule::new("dc.build", r"(?mi)^\s*build\s*:\s*", 6).capped(4),
        Rule::new("dc.ports", r"(?mi)^\s*ports\s*:\s*$", 5).capped(2),
        Rule::new("dc.volumes", r"(?mi)^\s*volumes\s*:\s*$", 6).capped(2),
        Rule::new("dc.networks", r"(?mi)^\s*networks\s*:\s*$", 6).capped(2),
        Rule::new("dc.depends_on", r"(?mi)^\s*depends_on\s*:\s*$", 6).capped(2),
        Rule::new("dc.environment", r"(?mi)^\s*environment\s*:\s*$", 4).capped(2),
        Rule::new("dc.version", r#"(?mi)^\s*version\s*:\s*["']?\d+(\.\d+)?["']?\s*$"#, 2).capped(1),
    ],
};

pub static KUBERNETES: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Kubernetes,
    aliases: &["k8s", "kube", "kubectl"],
    priority: 90,
    min_score: 20,
    rules: &[
        Rule::new("k8s.apiVersion", r"(?mi)^\s*apiVersion\s*:\s*[\w./-]+\s*$", 12).capped(1),
        Rule::new("k8s.kind", r"(?mi)^\s*kind\s*:\s*\w+\s*$", 10).capped(1),
        Rule::new("k8s.metadata", r"(?mi)^\s*metadata\s*:\s*$", 6).capped(1),
        Rule::new("k8s.spec", r"(?mi)^\s*spec\s*:\s*$", 4).capped(2),
        Rule::new("k8s.containers", r"(?mi)^\s*containers\s*:\s*$", 6).capped(1),
        Rule::new("k8s.image", r#"(?mi)^\s*image\s*:\s*["']?[\w./:-]+"#, 4).capped(6),
        Rule::new("k8s.selector", r"(?mi)^\s*selector\s*:\s*$", 4).capped(1),
    ],
};

pub static NGINX: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Nginx,
    aliases: &["nginx.conf"],
    priority: 88,
    min_score: 18,
    rules: &[
        Rule::new("ngx.server_block", r"(?mi)^\s*server\s*\{", 10).capped(3),
        Rule::new("ngx.location", r"(?mi)^\s*location\s+[^ {]+\s*\{", 8).capped(5),
        Rule::new(
            "ngx.proxy_pass",
            r"(?mi)^\s*proxy_pass\s+https?://|^\s*proxy_pass\s+unix:",
            10,
        )
        .capped(5),
        Rule::new("ngx.upstream", r"(?mi)^\s*upstream\s+\w+\s*\{", 10).capped(2),
        Rule::new("ngx.listen", r"(?mi)^\s*listen\s+\d+", 5).capped(5),
        Rule::new("ngx.ssl", r"(?mi)^\s*ssl_(certificate|certificate_key)\s+", 6).capped(2),
        Rule::new("ngx.directive_semicolon", r"(?m);\s*$", 2)
            .capped(20)
            .note("nginx directives end with ';'"),
    ],
};

pub static CADDYFILE: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Caddyfile,
    aliases: &["caddy"],
    priority: 87,
    min_score: 16,
    rules: &[
        Rule::new("cad.site_block", r"(?mi)^\s*([a-z0-9.-]+\.[a-z]{2,}|:\d+)\s*\{\s*$", 10).capped(2),
        Rule::new("cad.reverse_proxy", r"(?mi)^\s*reverse_proxy\s+", 10).capped(6),
        Rule::new("cad.file_server", r"(?mi)^\s*file_server\s*$", 7).capped(2),
        Rule::new("cad.encode", r"(?mi)^\s*encode\s+", 5).capped(2),
        Rule::new("cad.header", r"(?mi)^\s*header\s+", 4).capped(3),
        Rule::new("cad.handle", r"(?mi)^\s*handle(_path)?\s+", 4).capped(3),
        Rule::new("cad.tls", r"(?mi)^\s*tls\s+\S+@\S+", 4).capped(1),
        Rule::new("cad.matcher", r"(?m)^\s*@\w+\s+\w+", 4).capped(3),
    ],
};

pub static TERRAFORM: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Terraform,
    aliases: &["tf", "hcl"],
    priority: 80,
    min_score: 14,
    rules: &[
        Rule::new(
            "tf.block",
            r#"(?mi)^\s*(resource|data|module|variable|output|provider|terraform)\s+"[^"]+"\s+("?[^\s"]+"?)?\s*\{"#,
            12,
        )
        .capped(3),
        Rule::new("tf.assign", r"(?m)^\s*[a-zA-Z0-9_-]+\s*=\s*.+$", 3).capped(10),
        Rule::new("tf.interp", r"\$\{\s*[^}]+\s*\}", 4).capped(6),
    ],
};

pub static ANSIBLE: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Ansible,
    aliases: &["ansible-playbook", "playbook"],
    priority: 78,
    min_score: 16,
    rules: &[
        Rule::new("ans.hosts", r"(?mi)^\s*-?\s*hosts\s*:\s*.+$", 8).capped(2),
        Rule::new("ans.tasks", r"(?mi)^\s*tasks\s*:\s*$", 8).capped(1),
        Rule::new("ans.handlers", r"(?mi)^\s*handlers\s*:\s*$", 6).capped(1),
        Rule::new(
            "ans.module",
            r"(?mi)^\s*-?\s*(name|debug|copy|template|shell|command|service|apt|yum|file|lineinfile)\s*:",
            5,
        )
        .capped(8),
        Rule::new("ans.become", r"(?mi)^\s*become\s*:\s*(true|false|yes|no)\s*$", 4).capped(2),
    ],
};

pub static APACHE: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Apache,
    aliases: &["httpd", "apache.conf", "apache2.conf", "httpd.conf", "htaccess"],
    priority: 70,
    min_score: 14,
    rules: &[
        Rule::new(
            "ap.directive",
            r"(?mi)^\s*</?(VirtualHost|Directory|IfModule|Location|ProxyPass|ProxyPassReverse)\b",
            8,
        )
        .capped(6),
        Rule::new("ap.rewrite", r"(?mi)^\s*Rewrite(Engine|Rule|Cond)\b", 6).capped(6),
        Rule::new("ap.listen", r"(?mi)^\s*Listen\s+\d+", 4).capped(2),
        Rule::new("ap.server", r"(?m)^\s*(ServerName|ServerAlias|DocumentRoot|AllowOverride)\s+", 4).capped(6),
    ],
};

// ----------------------------------------------------------------------------
// Shell / scripts
// ----------------------------------------------------------------------------

pub static POWERSHELL: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Powershell,
    aliases: &["ps", "ps1", "pwsh"],
    priority: 75,
    min_score: 14,
    rules: &[
        Rule::new("ps.param", r"(?mi)^\s*param\s*\(", 10).capped(1),
        Rule::new(
            "ps.cmdlet",
            r"\b(Get|Set|New|Remove|Start|Stop|Restart|Test|Invoke|Write|Select|Sort|Format)-[A-Za-z]+\b",
            6,
        )
        .capped(10),
        Rule::new("ps.var", r"(?<!`)\$[A-Za-z_][A-Za-z0-9_]*", 3).capped(30),
        Rule::new(
            "ps.pipeline",
            r"\|\s*(Where-Object|Select-Object|ForEach-Object|Sort-Object|Out-File)\b",
            5,
        )
        .capped(10),
        Rule::new("ps.hashtable", r"(?s)@\{\s*[^}]*\}", 5).capped(2),
        Rule::new("ps.type_accel", r"(?i)\[(string|int|switch|bool|CmdletBinding|Parameter)\b", 4).capped(6),
        Rule::new("ps.comment", r"(?m)^\s*#([^!\n].*)?$", 1)
            .capped(20)
            .note("'#' comment that is not a shebang"),
    ],
};

pub static BASH: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Bash,
    aliases: &["sh", "shell", "zsh"],
    priority: 60,
    min_score: 12,
    rules: &[
        Rule::new(
            "sh.shebang",
            r"(?mi)^\s*#!\s*/(usr/)?bin/(env\s+)?(bash|sh|zsh)\b.*$",
            10,
        )
        .capped(1),
        Rule::new("sh.set", r"(?mi)^\s*set\s+-[euxo]+", 6).capped(2),
        Rule::new("sh.export", r"(?m)^\s*export\s+[A-Z_][A-Z0-9_]*=", 4).capped(10),
        Rule::new("sh.if_fi", r"(?mi)^\s*(if|elif|then|fi)\b", 2).capped(10),
        Rule::new("sh.func", r"(?m)^\s*(function\s+)?[a-zA-Z_][a-zA-Z0-9_]*\s*\(\)\s*\{", 4).capped(4),
        Rule::new("sh.sudo", r"\bsudo\b", 2).capped(10),
        Rule::new("sh.test", r"\[\[\s+[^\]]+\s+\]\]", 3).capped(6),
        Rule::new("sh.loop_head", r"(?m)^\s*(for|while|until)\s+[^\n]+;\s*do\s*$", 6).capped(4),
        Rule::new("sh.loop", r"(?m)^\s*(do|done|esac)\b", 3).capped(6),
        Rule::new("sh.chain", r"\s(&&|\|\|)\s", 1).capped(6),
    ],
};

pub static CMD: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Cmd,
    aliases: &["bat", "batch"],
    priority: 55,
    min_score: 10,
    rules: &[
        Rule::new("cmd.at_echo", r"(?mi)^\s*@?echo\s+(on|off)\b", 8).capped(1),
        Rule::new("cmd.set", r"(?mi)^\s*set\s+[A-Za-z_][A-Za-z0-9_]*=", 4).capped(10),
        Rule::new("cmd.if", r"(?mi)^\s*if\s+(not\s+)?(exist|defined)\b", 4).capped(6),
        Rule::new("cmd.goto", r"(?mi)^\s*goto\s+[:A-Za-z0-9_]+", 4).capped(5),
        Rule::new("cmd.label", r"(?m)^\s*:[A-Za-z0-9_]+", 3).capped(10),
        Rule::new("cmd.rem", r"(?mi)^\s*rem\s", 2).capped(10),
        Rule::new("cmd.percent_var", r"%[A-Za-z_][A-Za-z0-9_]*%", 2).capped(10),
    ],
};

// ----------------------------------------------------------------------------
// Data / configuration formats
// ----------------------------------------------------------------------------

pub static JSONL: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Jsonl,
    aliases: &["ndjson", "json-lines"],
    priority: 65,
    min_score: 14,
    rules: &[
        Rule::new("jsonl.lines", r"(?m)^\s*\{.*\}\s*$", 2).capped(50),
        Rule::new("jsonl.multi", r"\}\s*\n\s*\{", 8)
            .capped(2)
            .note("multiple JSON objects lines"),
    ],
};

pub static JSON: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Json,
    aliases: &[],
    priority: 50,
    min_score: 12,
    rules: &[
        Rule::new("json.braces", r"^\s*[\{\[]", 4).capped(1),
        Rule::new("json.kv", r#""[^"\n]*"\s*:\s*"#, 4).capped(20),
        Rule::new("json.truefalse", r"\b(true|false|null)\b", 1).capped(20),
    ],
};

pub static JSONC: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Jsonc,
    aliases: &["json-with-comments", "json5"],
    priority: 52,
    min_score: 18,
    rules: &[
        Rule::new("jsonc.braces", r"^\s*[\{\[]", 2).capped(1),
        Rule::new("jsonc.kv", r#""[^"\n]*"\s*:\s*"#, 2).capped(20),
        Rule::new("jsonc.key_comment", r#"(?m)^\s*//[^\n]*\n\s*"[^"\n]*"\s*:"#, 10)
            .capped(6)
            .note("comment line above a quoted key"),
        Rule::new("jsonc.trailing_comment", r"(?m)[,\{\[]\s*//[^\n]*$", 10).capped(6),
        Rule::new("jsonc.block_comment", r"(?s)/\*.*?\*/", 8).capped(2),
    ],
};

pub static YAML: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Yaml,
    aliases: &["yml"],
    priority: 45,
    min_score: 10,
    rules: &[
        Rule::new("y.key", r"(?m)^\s*[A-Za-z0-9_.-]+\s*:\s*.*$", 2).capped(30),
        Rule::new("y.list", r"(?m)^\s*-\s+.+$", 2).capped(30),
        Rule::new("y.doc", r"(?m)^\s*---\s*$", 4).capped(2),
        Rule::new("y.anchors", r"&[A-Za-z0-9_-]+|\*[A-Za-z0-9_-]+", 3).capped(6),
    ],
};

pub static TOML: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Toml,
    aliases: &[],
    priority: 44,
    min_score: 10,
    rules: &[
        Rule::new("toml.section", r"(?m)^\s*\[\[?[A-Za-z0-9_.-]+\]\]?\s*$", 6).capped(6),
        Rule::new("toml.kv", r"(?m)^\s*[A-Za-z0-9_.-]+\s*=\s*.+$", 3).capped(30),
    ],
};

pub static INI: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Ini,
    aliases: &["cfg", "conf"],
    priority: 40,
    min_score: 9,
    rules: &[
        Rule::new("ini.section", r"(?m)^\s*\[[^\]\n]+\]\s*$", 6).capped(8),
        Rule::new("ini.kv", r"(?m)^\s*[A-Za-z0-9_.-]+\s*=\s*.*$", 2).capped(30),
        Rule::new("ini.comment", r"(?m)^\s*[;#].*$", 1).capped(30),
    ],
};

pub static DOTENV: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Dotenv,
    aliases: &[".env", "env"],
    priority: 43,
    min_score: 10,
    rules: &[
        Rule::new("env.kv", r"(?m)^\s*[A-Za-z_][A-Za-z0-9_]*\s*=\s*.*$", 3).capped(40),
        Rule::new("env.export", r"(?m)^\s*export\s+[A-Za-z_][A-Za-z0-9_]*=", 4).capped(10),
        Rule::new("env.upper_kv", r"(?m)^[A-Z][A-Z0-9_]*=\S", 2)
            .capped(20)
            .note("SCREAMING_CASE=value without spaces"),
    ],
};

pub static CSV: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Csv,
    aliases: &["tsv-comma"],
    priority: 35,
    min_score: 8,
    rules: &[
        Rule::new("csv.header", r"(?m)^[^\n,]+(,[^\n,]+){2,}\s*$", 6).capped(1),
        Rule::new("csv.rows", r"(?m)^[^\n,]+(,[^\n,]+){2,}\s*$", 1).capped(30),
    ],
};

// ----------------------------------------------------------------------------
// Markup
// ----------------------------------------------------------------------------

pub static SVG: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Svg,
    aliases: &[],
    priority: 60,
    min_score: 14,
    rules: &[
        Rule::new("svg.tag", r"(?i)<svg\b[^>]*>", 14).capped(1),
        Rule::new("svg.path", r#"(?i)<path\b[^>]*d\s*=\s*["'][^"']+"#, 6).capped(5),
        Rule::new("svg.shape", r"(?i)<(circle|rect|ellipse|polygon|polyline|line|g)\b", 2).capped(10),
    ],
};

pub static XML: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Xml,
    aliases: &["xsd", "xsl", "plist"],
    priority: 52,
    min_score: 12,
    rules: &[
        Rule::new("xml.prolog", r"(?mi)^\s*<\?xml\b[^?]*\?>", 10).capped(1),
        Rule::new("xml.tag", r"<([A-Za-z_][\w:.-]*)\b[^>]*>", 2).capped(20),
        Rule::new("xml.namespace", r#"\bxmlns(:\w+)?\s*=\s*""#, 4).capped(3),
    ],
};

pub static HTML: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Html,
    aliases: &["htm", "xhtml"],
    priority: 51,
    min_score: 11,
    rules: &[
        Rule::new("html.doctype", r"(?mi)^\s*<!DOCTYPE\s+html>", 12).capped(1),
        Rule::new(
            "html.tags",
            r"(?i)</?(div|span|p|a|img|section|header|footer|main|script|style|link|meta|ul|li|table|form|button|input|body|head|html)\b",
            2,
        )
        .capped(30),
        Rule::new(
            "html.attr",
            r#"(?i)\b(class|id|href|src|data-[\w-]+)\s*=\s*["'][^"']*["']"#,
            2,
        )
        .capped(30),
    ],
};

pub static MARKDOWN: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Markdown,
    aliases: &["md", "mkd"],
    priority: 30,
    min_score: 9,
    rules: &[
        Rule::new("md.headings", r"(?m)^\s{0,3}#{1,6}\s+.+$", 4).capped(10),
        Rule::new("md.list", r"(?m)^\s*([-*+]|\d+\.)\s+.+$", 2).capped(20),
        Rule::new("md.codefence", r"(?m)^\s*```[\w-]*\s*$", 6).capped(4),
        Rule::new("md.link", r"\[[^\]]+\]\([^)]+\)", 2).capped(10),
        Rule::new("md.emphasis", r"\*\*[^*\n]+\*\*", 1).capped(10),
    ],
};

pub static MDX: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Mdx,
    aliases: &[],
    priority: 31,
    min_score: 10,
    rules: &[
        Rule::new("mdx.jsx", r"<\s*[A-Z][A-Za-z0-9]*\b[^>]*>", 6).capped(10),
        Rule::new("mdx.export", r"(?m)^\s*export\s+default\s+", 4).capped(2),
        Rule::new("mdx.codefence", r"(?m)^\s*```[\w-]*\s*$", 3).capped(4),
        Rule::new("mdx.headings", r"(?m)^\s{0,3}#{1,6}\s+.+$", 2).capped(5),
    ],
};

// ----------------------------------------------------------------------------
// Stylesheets
// ----------------------------------------------------------------------------

pub static CSS: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Css,
    aliases: &[],
    priority: 25,
    min_score: 9,
    rules: &[
        Rule::new("css.rule", r"(?s)[^{]+\{\s*[^}]*:\s*[^}]*\}", 6).capped(4),
        Rule::new(
            "css.prop",
            r"\b(display|position|margin|padding|color|background|font-size|font-family|border|width|height)\s*:",
            2,
        )
        .capped(20),
        Rule::new("css.selector", r"(^|\n)\s*[#.][\w-]+\s*\{", 3).capped(10),
        Rule::new("css.at_rule", r"@(media|keyframes|import|font-face)\b", 4).capped(4),
    ],
};

pub static SCSS: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Scss,
    aliases: &["sass"],
    priority: 26,
    min_score: 10,
    rules: &[
        Rule::new("scss.vars", r"(?m)^\s*\$[\w-]+\s*:\s*.+;$", 6).capped(10),
        Rule::new("scss.var_ref", r"(?m):[^;\n]*\$[\w-]+", 4).capped(8),
        Rule::new("scss.nesting", r"(^|\n)\s*[#.][\w-]+\s*\{\s*[^}]*\{\s*", 6).capped(3),
        Rule::new("scss.mixin", r"(?m)^\s*@mixin\s+[\w-]+\b", 6).capped(4),
        Rule::new("scss.include", r"(?m)^\s*@include\s+[\w-]+\b", 5).capped(6),
        Rule::new("scss.nested_rule", r"(?m)^\s+[a-z&][\w&:.-]*\s*\{", 4).capped(6),
        Rule::new("scss.parent_ref", r"&:[\w-]+", 2).capped(6),
        Rule::new("scss.line_comment", r"(?m)^\s*//", 3).capped(5),
    ],
};

pub static LESS: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Less,
    aliases: &[],
    priority: 26,
    min_score: 9,
    rules: &[
        Rule::new("less.vars", r"(?m)^\s*@[\w-]+\s*:\s*.+;$", 6).capped(10),
        Rule::new("less.mixin", r"(?m)^\s*\.[\w-]+\s*\([^)]*\)\s*\{", 6).capped(4),
        Rule::new("less.guard", r"\bwhen\s*\(", 4).capped(3),
    ],
};

// ----------------------------------------------------------------------------
// SQL dialects
// ----------------------------------------------------------------------------

pub static POSTGRESQL: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Postgresql,
    aliases: &["postgres", "psql", "pgsql"],
    priority: 42,
    min_score: 14,
    rules: &[
        Rule::new(
            "pg.cast",
            r"(?i)[\w)']::(text|int[248]?|integer|bigint|smallint|numeric|real|float[48]?|boolean|bool|jsonb?|uuid|date|time|timestamptz|timestamp|interval|varchar|regclass)\b",
            6,
        )
        .capped(8)
        .note("value::type cast"),
        Rule::new("pg.returning", r"(?i)\bRETURNING\b", 4).capped(4),
        Rule::new("pg.json", r"(?i)\bjsonb?\b", 4).capped(6),
        Rule::new("pg.serial", r"(?i)\b(BIG)?SERIAL\b|\bON\s+CONFLICT\b", 5).capped(4),
        Rule::new(
            "pg.sql_core",
            r"(?i)\b(SELECT|INSERT|UPDATE|DELETE|CREATE|ALTER|DROP|JOIN|WHERE|GROUP\s+BY|ORDER\s+BY)\b",
            2,
        )
        .capped(30),
    ],
};

pub static MYSQL: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Mysql,
    aliases: &["mariadb"],
    priority: 42,
    min_score: 14,
    rules: &[
        Rule::new("my.backticks", r"`[A-Za-z0-9_]+`", 6).capped(10),
        Rule::new("my.engine", r"(?i)\bENGINE\s*=\s*\w+\b", 5).capped(3),
        Rule::new("my.limit", r"(?i)\bLIMIT\s+\d+(\s*,\s*\d+)?\b", 3).capped(6),
        Rule::new("my.auto_increment", r"(?i)\bAUTO_INCREMENT\b", 5).capped(3),
        Rule::new(
            "my.sql_core",
            r"(?i)\b(SELECT|INSERT|UPDATE|DELETE|CREATE|ALTER|DROP|JOIN|WHERE|GROUP\s+BY|ORDER\s+BY)\b",
            2,
        )
        .capped(30),
    ],
};

pub static SQL: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Sql,
    aliases: &[],
    priority: 35,
    min_score: 10,
    rules: &[
        Rule::new(
            "sql.core",
            r"(?i)\b(SELECT|INSERT|UPDATE|DELETE|CREATE|ALTER|DROP|FROM|JOIN|WHERE|GROUP\s+BY|ORDER\s+BY|HAVING)\b",
            3,
        )
        .capped(40),
        Rule::new(
            "sql.ddl",
            r"(?i)\b(PRIMARY\s+KEY|FOREIGN\s+KEY|NOT\s+NULL|VARCHAR\s*\(|DECIMAL\s*\(|REFERENCES\s+\w+)",
            3,
        )
        .capped(6),
        Rule::new("sql.terminator", r"(?m);\s*$", 1).capped(20),
        Rule::new("sql.comment", r"(?m)^\s*--.*$", 2).capped(20),
    ],
};

// ----------------------------------------------------------------------------
// JavaScript family
// ----------------------------------------------------------------------------

pub static TSX: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Tsx,
    aliases: &[],
    priority: 34,
    min_score: 12,
    rules: &[
        Rule::new("tsx.importReact", r#"(?m)^\s*import\s+.*\s+from\s+["']react["'];?$"#, 6).capped(2),
        Rule::new("tsx.tsTypes", r"\b(interface|type)\s+[A-Za-z0-9_]+\s*(=|\{)", 4).capped(10),
        Rule::new("tsx.jsx", r"<\s*[A-Z][A-Za-z0-9]*\b[^>]*>", 5).capped(20),
        Rule::new("ts.generic", r":\s*[A-Za-z_][\w<>\[\]|& ,]+", 2).capped(20),
    ],
};

pub static JSX: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Jsx,
    aliases: &[],
    priority: 33,
    min_score: 11,
    rules: &[
        Rule::new("jsx.jsx", r"<\s*[A-Z][A-Za-z0-9]*\b[^>]*>", 6).capped(25),
        Rule::new("jsx.export", r"(?m)^\s*export\s+default\s+", 3).capped(4),
        Rule::new("jsx.hooks", r"\buse(State|Effect|Memo|Callback|Ref)\s*\(", 3).capped(6),
        Rule::new(
            "jsx.core",
            r"\b(const|let|var|function|return|if|else|import|export|class|new)\b",
            1,
        )
        .capped(30),
    ],
};

pub static TYPESCRIPT: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Typescript,
    aliases: &["ts", "mts", "cts"],
    priority: 32,
    min_score: 10,
    rules: &[
        Rule::new("ts.types", r"\b(interface|type|implements|enum|namespace)\b", 4).capped(20),
        Rule::new("ts.typed", r":\s*[A-Za-z_][\w<>\[\]|& ,]+", 2).capped(30),
        Rule::new("ts.import", r#"(?m)^\s*import\s+.+from\s+["'][^"']+["'];?$"#, 2).capped(10),
        Rule::new("ts.return_type", r"\)\s*:\s*[A-Za-z_][\w<>\[\]|]*\s*(\{|=>)", 4).capped(6),
        Rule::new("ts.modifiers", r"\b(readonly|private|protected|public)\s+\w+\s*[?:]", 3).capped(6),
    ],
};

pub static JAVASCRIPT: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Javascript,
    aliases: &["js", "mjs", "cjs", "node"],
    priority: 31,
    min_score: 9,
    rules: &[
        Rule::new(
            "js.core",
            r"\b(const|let|var|function|return|if|else|import|export|class|new|await|async)\b",
            2,
        )
        .capped(40),
        Rule::new("js.arrow", r"=>", 1).capped(40),
        Rule::new("js.console", r"\bconsole\.(log|error|warn|info)\b", 2).capped(10),
        Rule::new("js.promise", r"\.(then|catch)\(", 2).capped(6),
    ],
};

// ----------------------------------------------------------------------------
// Other programming languages
// ----------------------------------------------------------------------------

pub static PYTHON: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Python,
    aliases: &["py", "python3", "py3"],
    priority: 20,
    min_score: 9,
    rules: &[
        Rule::new("py.def", r"(?m)^\s*def\s+\w+\s*\(", 6).capped(6),
        Rule::new("py.import", r"(?m)^\s*(import|from)\s+\w+", 3).capped(10),
        Rule::new("py.class", r"(?m)^\s*class\s+\w+\s*(\(|:)", 4).capped(6),
        Rule::new("py.colonBlocks", r"(?m):\s*$", 1).capped(30),
        Rule::new("py.dunder", r"__(init|name|main)__|\bself\.", 2).capped(10),
    ],
};

pub static GO: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Go,
    aliases: &["golang"],
    priority: 20,
    min_score: 9,
    rules: &[
        Rule::new("go.package", r"(?m)^\s*package\s+\w+\s*$", 8).capped(1),
        Rule::new("go.import", r#"(?m)^\s*import\s+(\(|"[\w./-]+")"#, 4).capped(6),
        Rule::new("go.func", r"(?m)^\s*func\s+(\([\w\s*]+\)\s*)?\w+\s*\(", 5).capped(10),
        Rule::new("go.short_assign", r"\w+\s*:=\s*", 1).capped(10),
    ],
};

pub static PHP: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Php,
    aliases: &["php8"],
    priority: 20,
    min_score: 9,
    rules: &[
        Rule::new("php.open", r"(?i)<\?php\b", 10).capped(1),
        Rule::new("php.var", r"\$[A-Za-z_][A-Za-z0-9_]*", 2).capped(30),
        Rule::new("php.arrow", r"->", 1).capped(30),
    ],
};

pub static RUBY: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Ruby,
    aliases: &["rb"],
    priority: 18,
    min_score: 8,
    rules: &[
        Rule::new("rb.def", r"(?m)^\s*def\s+\w+", 5).capped(10),
        Rule::new("rb.end", r"(?m)^\s*end\s*$", 3).capped(15),
        Rule::new("rb.class", r"(?m)^\s*class\s+\w+", 4).capped(6),
        Rule::new("rb.puts", r"(?m)^\s*(puts|require|attr_accessor)\s", 2).capped(10),
    ],
};

pub static JAVA: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Java,
    aliases: &[],
    priority: 18,
    min_score: 8,
    rules: &[
        Rule::new("java.class", r"\b(public|private|protected)\s+class\s+\w+", 6).capped(6),
        Rule::new("java.import", r"(?m)^\s*import\s+[\w.]+;", 4).capped(10),
        Rule::new("java.package", r"(?m)^\s*package\s+[\w.]+;", 4).capped(2),
        Rule::new("java.sysout", r"\bSystem\.(out|err)\.print", 4).capped(6),
    ],
};

pub static CSHARP: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Csharp,
    aliases: &["cs", "c#"],
    priority: 18,
    min_score: 8,
    rules: &[
        Rule::new("cs.using", r"(?m)^\s*using\s+[\w.]+;", 4).capped(10),
        Rule::new("cs.namespace", r"(?m)^\s*namespace\s+[\w.]+", 4).capped(4),
        Rule::new("cs.class", r"\b(class|record|struct)\s+\w+", 3).capped(12),
        Rule::new("cs.console", r"\bConsole\.Write(Line)?\b", 4).capped(6),
        Rule::new("cs.linq", r"\b(from|select|where)\b", 1).capped(30),
    ],
};

pub static RUST: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Rust,
    aliases: &["rs"],
    priority: 18,
    min_score: 8,
    rules: &[
        Rule::new("rs.fn", r"(?m)^\s*(pub(\(crate\))?\s+)?(async\s+)?fn\s+\w+", 5).capped(10),
        Rule::new("rs.use", r"(?m)^\s*use\s+[\w:{}, *]+;", 4).capped(10),
        Rule::new("rs.let", r"\blet\s+mut\b|\blet\b", 1).capped(30),
        Rule::new("rs.macro", r"\b(println|format|vec|assert_eq|assert|panic)!", 3).capped(10),
        Rule::new("rs.impl", r"(?m)^\s*impl(<[^>]*>)?\s+\w+", 4).capped(6),
    ],
};

pub static C_LANG: LanguageDefinition = LanguageDefinition {
    id: LanguageId::C,
    aliases: &["h"],
    priority: 16,
    min_score: 7,
    rules: &[
        Rule::new("c.include", r"(?m)^\s*#include\s+<[^>]+>", 6).capped(10),
        Rule::new("c.main", r"\bint\s+main\s*\(", 4).capped(2),
        Rule::new("c.stdio", r"\b(printf|scanf|malloc|free)\s*\(", 2).capped(10),
        Rule::new("c.semicolons", r"(?m);\s*$", 1).capped(40),
    ],
};

pub static CPP: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Cpp,
    aliases: &["c++", "cc", "hpp", "cxx"],
    priority: 16,
    min_score: 7,
    rules: &[
        Rule::new("cpp.include", r"(?m)^\s*#include\s+<[^>]+>", 4).capped(10),
        Rule::new("cpp.std", r"\bstd::\w+", 4).capped(15),
        Rule::new("cpp.templates", r"template\s*<[^>]+>", 4).capped(5),
        Rule::new("cpp.stream", r"\b(cout|cin|cerr)\s*(<<|>>)", 3).capped(10),
    ],
};

// ----------------------------------------------------------------------------
// Logs
// ----------------------------------------------------------------------------

pub static NGINX_ACCESS_LOG: LanguageDefinition = LanguageDefinition {
    id: LanguageId::NginxAccessLog,
    aliases: &["nginx access log", "access.log"],
    priority: 65,
    min_score: 14,
    rules: &[
        Rule::new("nal.ip", r"(?m)^\s*\d{1,3}(\.\d{1,3}){3}\s+", 4).capped(20),
        Rule::new("nal.request", r#""([A-Z]+)\s+[^"]+\s+HTTP/\d\.\d""#, 8).capped(10),
        Rule::new("nal.status", r#"(?m)"\s+\d{3}\s+\d+(\s+"[^"]*"\s+"[^"]*")?\s*$"#, 3).capped(20),
    ],
};

pub static NGINX_ERROR_LOG: LanguageDefinition = LanguageDefinition {
    id: LanguageId::NginxErrorLog,
    aliases: &["nginx error log", "error.log"],
    priority: 65,
    min_score: 14,
    rules: &[
        Rule::new("nel.date", r"(?mi)^\d{4}/\d{2}/\d{2}\s+\d{2}:\d{2}:\d{2}\s+\[[a-z]+\]", 10).capped(10),
        Rule::new("nel.level", r"(?mi)\b(crit|error|warn|notice|info|debug)\b", 3).capped(20),
        Rule::new("nel.client", r"(?mi)\bclient:\s*\d{1,3}(\.\d{1,3}){3}\b", 4).capped(10),
    ],
};

pub static LOG: LanguageDefinition = LanguageDefinition {
    id: LanguageId::Log,
    aliases: &["logs", "logfile"],
    priority: 20,
    min_score: 8,
    rules: &[
        Rule::new("log.isoDate", r"(?m)^\s*\[?\d{4}-\d{2}-\d{2}[ T]\d{2}:\d{2}:\d{2}", 5).capped(20),
        Rule::new("log.level", r"\b(INFO|WARN|WARNING|ERROR|DEBUG|TRACE|FATAL)\b", 2).capped(30),
        Rule::new("log.syslog", r"(?m)^\s*[A-Z][a-z]{2}\s+\d{1,2}\s+\d{2}:\d{2}:\d{2}\s+", 5).capped(10),
    ],
};

/// All built-in definitions, most specific first.
///
/// Table order only matters for full ties (same score and priority): the
/// earlier definition wins.
pub static ALL_LANGUAGES: &[&LanguageDefinition] = &[
    &DOCKERFILE,
    &DOCKER_COMPOSE,
    &KUBERNETES,
    &NGINX,
    &CADDYFILE,
    &TERRAFORM,
    &ANSIBLE,
    &APACHE,
    &POWERSHELL,
    &BASH,
    &CMD,
    &JSONL,
    &JSON,
    &JSONC,
    &YAML,
    &TOML,
    &INI,
    &DOTENV,
    &CSV,
    &SVG,
    &XML,
    &HTML,
    &MARKDOWN,
    &MDX,
    &CSS,
    &SCSS,
    &LESS,
    &POSTGRESQL,
    &MYSQL,
    &SQL,
    &TSX,
    &JSX,
    &TYPESCRIPT,
    &JAVASCRIPT,
    &PYTHON,
    &GO,
    &PHP,
    &RUBY,
    &JAVA,
    &CSHARP,
    &RUST,
    &C_LANG,
    &CPP,
    &NGINX_ACCESS_LOG,
    &NGINX_ERROR_LOG,
    &LOG,
];
