//! Declarative detector catalogs.
//!
//! Every detector is a flat, immutable record naming its match criteria;
//! one generic matcher consumes them all. Catalog order is stable and
//! meaningful: results preserve it, and the primary-stack tie-break relies
//! on it.

/// A detection rule for one technology, framework, or tool.
///
/// A detector matches when any of its defined criteria matches; criteria it
/// leaves empty are never consulted.
#[derive(Debug, Clone, Copy)]
pub struct Detector {
    /// Stable identifier used in reports.
    pub name: &'static str,
    /// Display name.
    pub label: &'static str,
    /// Node package names looked up in `package.json` evidence, and, lower-
    /// cased, in Python manifest evidence.
    pub deps: &'static [&'static str],
    /// Secondary existence checks (marker pattern dialects apply).
    pub config_files: &'static [&'static str],
    /// File or directory existence patterns.
    pub markers: &'static [&'static str],
    /// Substrings searched in concatenated `.csproj` text.
    pub csproj_refs: &'static [&'static str],
    /// Substrings searched in the root `Cargo.toml` text.
    pub cargo_refs: &'static [&'static str],
    /// Substrings searched in the root `Gemfile` text.
    pub gemfile_refs: &'static [&'static str],
    /// Substrings searched in the root `pom.xml` text.
    pub pom_refs: &'static [&'static str],
    /// Fallback signal: some file with this extension exists (shallow probe).
    pub file_ext: Option<&'static str>,
}

impl Detector {
    pub const fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            deps: &[],
            config_files: &[],
            markers: &[],
            csproj_refs: &[],
            cargo_refs: &[],
            gemfile_refs: &[],
            pom_refs: &[],
            file_ext: None,
        }
    }

    pub const fn deps(mut self, deps: &'static [&'static str]) -> Self {
        self.deps = deps;
        self
    }

    pub const fn configs(mut self, config_files: &'static [&'static str]) -> Self {
        self.config_files = config_files;
        self
    }

    pub const fn markers(mut self, markers: &'static [&'static str]) -> Self {
        self.markers = markers;
        self
    }

    pub const fn csproj_refs(mut self, refs: &'static [&'static str]) -> Self {
        self.csproj_refs = refs;
        self
    }

    pub const fn cargo_refs(mut self, refs: &'static [&'static str]) -> Self {
        self.cargo_refs = refs;
        self
    }

    pub const fn gemfile_refs(mut self, refs: &'static [&'static str]) -> Self {
        self.gemfile_refs = refs;
        self
    }

    pub const fn pom_refs(mut self, refs: &'static [&'static str]) -> Self {
        self.pom_refs = refs;
        self
    }

    pub const fn file_ext(mut self, ext: &'static str) -> Self {
        self.file_ext = Some(ext);
        self
    }
}

/// A tech-stack rule: gated on marker existence, sized by extension counts.
#[derive(Debug, Clone, Copy)]
pub struct StackDetector {
    pub name: &'static str,
    pub label: &'static str,
    /// At least one of these must exist for the stack to register.
    pub markers: &'static [&'static str],
    /// Extensions (no leading dot) counted once the stack registers.
    pub file_patterns: &'static [&'static str],
    /// Config files reported when present at the root.
    pub config_files: &'static [&'static str],
}

/// A documentation or design-system convention: directories first, then
/// files; the first existing path wins.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactDetector {
    pub name: &'static str,
    pub label: &'static str,
    pub dirs: &'static [&'static str],
    pub files: &'static [&'static str],
}

pub const STACK_DETECTORS: &[StackDetector] = &[
    StackDetector {
        name: "node",
        label: "Node.js / TypeScript",
        markers: &["package.json"],
        file_patterns: &["ts", "tsx", "js", "jsx", "mjs", "mts"],
        config_files: &[
            "tsconfig.json",
            ".eslintrc.json",
            ".eslintrc.js",
            ".prettierrc",
            "vitest.config.ts",
            "jest.config.ts",
        ],
    },
    StackDetector {
        name: "dotnet",
        label: ".NET / C#",
        markers: &["*.sln", "*.csproj", "Directory.Build.props"],
        file_patterns: &["cs", "csproj", "sln"],
        config_files: &["global.json", "Directory.Build.props", "nuget.config"],
    },
    StackDetector {
        name: "rust",
        label: "Rust",
        markers: &["Cargo.toml"],
        file_patterns: &["rs"],
        config_files: &["Cargo.toml", "Cargo.lock", "rust-toolchain.toml"],
    },
    StackDetector {
        name: "python",
        label: "Python",
        markers: &["pyproject.toml", "setup.py", "requirements.txt"],
        file_patterns: &["py"],
        config_files: &["pyproject.toml", "setup.cfg", "tox.ini", ".flake8", "mypy.ini"],
    },
    StackDetector {
        name: "go",
        label: "Go",
        markers: &["go.mod"],
        file_patterns: &["go"],
        config_files: &["go.mod", "go.sum"],
    },
    StackDetector {
        name: "ruby",
        label: "Ruby",
        markers: &["Gemfile"],
        file_patterns: &["rb", "erb"],
        config_files: &["Gemfile", ".rubocop.yml"],
    },
    StackDetector {
        name: "java",
        label: "Java / Kotlin",
        markers: &["pom.xml", "build.gradle", "build.gradle.kts"],
        file_patterns: &["java", "kt", "kts"],
        config_files: &["pom.xml", "build.gradle", "build.gradle.kts", "settings.gradle"],
    },
];

pub const FRONTEND_DETECTORS: &[Detector] = &[
    Detector::new("react", "React").deps(&["react"]),
    Detector::new("next.js", "Next.js")
        .deps(&["next"])
        .configs(&["next.config.js", "next.config.mjs", "next.config.ts"]),
    Detector::new("vue", "Vue").deps(&["vue"]).configs(&["vue.config.js"]),
    Detector::new("angular", "Angular")
        .deps(&["@angular/core"])
        .configs(&["angular.json"]),
    Detector::new("svelte", "Svelte")
        .deps(&["svelte"])
        .configs(&["svelte.config.js", "svelte.config.ts"]),
    Detector::new("astro", "Astro")
        .deps(&["astro"])
        .configs(&["astro.config.mjs", "astro.config.ts"]),
];

pub const BACKEND_DETECTORS: &[Detector] = &[
    Detector::new("express", "Express").deps(&["express"]),
    Detector::new("nestjs", "NestJS")
        .deps(&["@nestjs/core"])
        .configs(&["nest-cli.json"]),
    Detector::new("fastify", "Fastify").deps(&["fastify"]),
    Detector::new("asp.net-core", "ASP.NET Core")
        .markers(&["Program.cs"])
        .csproj_refs(&["Microsoft.AspNetCore"]),
    Detector::new("fastapi", "FastAPI").deps(&["fastapi"]),
    Detector::new("django", "Django")
        .deps(&["django"])
        .configs(&["manage.py"]),
    Detector::new("flask", "Flask").deps(&["flask"]),
    Detector::new("spring-boot", "Spring Boot").pom_refs(&["spring-boot"]),
    Detector::new("rails", "Rails").gemfile_refs(&["rails"]),
    Detector::new("axum", "Axum").cargo_refs(&["axum"]),
    Detector::new("actix", "Actix").cargo_refs(&["actix-web"]),
];

pub const CSS_DETECTORS: &[Detector] = &[
    Detector::new("tailwind", "Tailwind CSS")
        .deps(&["tailwindcss"])
        .configs(&["tailwind.config.js", "tailwind.config.ts", "tailwind.config.mjs"]),
    Detector::new("sass", "SASS/SCSS")
        .deps(&["sass", "node-sass"])
        .file_ext("scss"),
    Detector::new("styled-components", "Styled Components").deps(&["styled-components"]),
    Detector::new("emotion", "Emotion").deps(&["@emotion/react"]),
];

pub const ORM_DETECTORS: &[Detector] = &[
    Detector::new("prisma", "Prisma")
        .deps(&["prisma", "@prisma/client"])
        .configs(&["prisma/schema.prisma"]),
    Detector::new("typeorm", "TypeORM")
        .deps(&["typeorm"])
        .configs(&["ormconfig.json", "ormconfig.ts", "ormconfig.js"]),
    Detector::new("drizzle", "Drizzle")
        .deps(&["drizzle-orm"])
        .configs(&["drizzle.config.ts", "drizzle.config.js"]),
    Detector::new("ef-core", "Entity Framework Core").csproj_refs(&["Microsoft.EntityFrameworkCore"]),
    Detector::new("sqlalchemy", "SQLAlchemy").deps(&["sqlalchemy"]),
    Detector::new("diesel", "Diesel")
        .configs(&["diesel.toml"])
        .cargo_refs(&["diesel"]),
    Detector::new("sequelize", "Sequelize")
        .deps(&["sequelize"])
        .configs(&[".sequelizerc"]),
];

pub const STATE_MANAGEMENT_DETECTORS: &[Detector] = &[
    Detector::new("redux", "Redux").deps(&["@reduxjs/toolkit", "redux"]),
    Detector::new("zustand", "Zustand").deps(&["zustand"]),
    Detector::new("pinia", "Pinia").deps(&["pinia"]),
    Detector::new("mobx", "MobX").deps(&["mobx"]),
    Detector::new("jotai", "Jotai").deps(&["jotai"]),
];

pub const TESTING_DETECTORS: &[Detector] = &[
    Detector::new("vitest", "Vitest")
        .deps(&["vitest"])
        .configs(&["vitest.config.ts", "vitest.config.js", "vitest.config.mjs"]),
    Detector::new("jest", "Jest")
        .deps(&["jest"])
        .configs(&["jest.config.ts", "jest.config.js", "jest.config.mjs"]),
    Detector::new("playwright", "Playwright")
        .deps(&["@playwright/test", "playwright"])
        .configs(&["playwright.config.ts", "playwright.config.js"]),
    Detector::new("cypress", "Cypress")
        .deps(&["cypress"])
        .configs(&["cypress.config.ts", "cypress.config.js"]),
    Detector::new("xunit", "xUnit").csproj_refs(&["xunit"]),
    Detector::new("nunit", "NUnit").csproj_refs(&["NUnit"]),
    Detector::new("pytest", "pytest")
        .deps(&["pytest"])
        .configs(&["conftest.py"]),
    Detector::new("mocha", "Mocha")
        .deps(&["mocha"])
        .configs(&[".mocharc.yml", ".mocharc.json"]),
];

pub const DOC_DETECTORS: &[ArtifactDetector] = &[
    ArtifactDetector {
        name: "prd",
        label: "PRDs",
        dirs: &["docs/prd", "docs/PRD"],
        files: &["PRD.md", "docs/PRD.md"],
    },
    ArtifactDetector {
        name: "adr",
        label: "ADRs",
        dirs: &["adr", "docs/adr", "docs/02_architecture/ADR"],
        files: &["ARCHITECTURE.md", "docs/architecture.md"],
    },
    ArtifactDetector {
        name: "apiSpec",
        label: "API Specs",
        dirs: &["docs/api", "docs/03_api"],
        files: &[
            "openapi.yaml",
            "openapi.yml",
            "openapi.json",
            "swagger.json",
            "swagger.yaml",
        ],
    },
    ArtifactDetector {
        name: "technicalSpec",
        label: "Technical Specs",
        dirs: &["docs/specs", "docs/technical"],
        files: &["TECHNICAL.md", "docs/technical.md"],
    },
];

pub const DESIGN_SYSTEM_DETECTORS: &[ArtifactDetector] = &[
    ArtifactDetector {
        name: "storybook",
        label: "Storybook",
        dirs: &[".storybook"],
        files: &[],
    },
    ArtifactDetector {
        name: "figma-tokens",
        label: "Figma Tokens",
        dirs: &[".figma"],
        files: &["figma-tokens.json"],
    },
    ArtifactDetector {
        name: "design-tokens",
        label: "Design Tokens",
        dirs: &["tokens", "design-tokens", "styles/tokens"],
        files: &[],
    },
    ArtifactDetector {
        name: "component-library",
        label: "Component Library",
        dirs: &["packages/ui", "packages/components"],
        files: &[],
    },
];

pub const LOGGING_DETECTORS: &[Detector] = &[
    Detector::new("serilog", "Serilog").csproj_refs(&["Serilog"]),
    Detector::new("winston", "Winston").deps(&["winston"]),
    Detector::new("pino", "Pino").deps(&["pino"]),
    Detector::new("bunyan", "Bunyan").deps(&["bunyan"]),
    Detector::new("log4net", "log4net").csproj_refs(&["log4net"]),
    Detector::new("nlog", "NLog").csproj_refs(&["NLog"]),
];

pub const AUTHENTICATION_DETECTORS: &[Detector] = &[
    Detector::new("azure-ad-b2c", "Azure AD B2C").deps(&[
        "@azure/msal-browser",
        "@azure/msal-node",
        "@azure/msal-react",
    ]),
    Detector::new("azure-ad", "Azure AD").csproj_refs(&["Microsoft.Identity.Web"]),
    Detector::new("auth0", "Auth0").deps(&["auth0", "@auth0/nextjs-auth0", "@auth0/auth0-react"]),
    Detector::new("firebase", "Firebase Auth").deps(&["firebase-admin", "firebase"]),
    Detector::new("cognito", "AWS Cognito").deps(&["aws-amplify", "@aws-amplify/auth"]),
    Detector::new("keycloak", "Keycloak").deps(&["keycloak-js", "keycloak-connect"]),
    Detector::new("custom-jwt", "JWT")
        .deps(&["jsonwebtoken"])
        .csproj_refs(&["System.IdentityModel.Tokens.Jwt"]),
];

pub const CACHING_DETECTORS: &[Detector] = &[
    Detector::new("redis", "Redis")
        .deps(&["ioredis", "redis"])
        .csproj_refs(&["StackExchange.Redis"]),
    Detector::new("memcached", "Memcached").deps(&["memcached", "memjs"]),
];

pub const ERROR_HANDLING_DETECTORS: &[Detector] = &[Detector::new(
    "problem-details",
    "Problem Details (RFC 7807)",
)
.csproj_refs(&[
    "Hellang.Middleware.ProblemDetails",
    "Microsoft.AspNetCore.Http.Results",
])];

pub const API_PATTERN_DETECTORS: &[Detector] = &[
    Detector::new("api-versioning", "API Versioning")
        .deps(&["express-api-versioning"])
        .csproj_refs(&["Asp.Versioning"]),
    Detector::new("swagger", "Swagger/OpenAPI")
        .deps(&["@nestjs/swagger", "swagger-ui-express"])
        .csproj_refs(&["Swashbuckle"]),
];

pub const FEATURE_FLAG_DETECTORS: &[Detector] = &[
    Detector::new("launchdarkly", "LaunchDarkly").deps(&[
        "launchdarkly-node-server-sdk",
        "launchdarkly-js-client-sdk",
    ]),
    Detector::new("azure-app-config", "Azure App Config")
        .deps(&["@azure/app-configuration"])
        .csproj_refs(&["Microsoft.Azure.AppConfiguration"]),
    Detector::new("unleash", "Unleash").deps(&["unleash-client"]),
    Detector::new("flagsmith", "Flagsmith").deps(&["flagsmith"]),
];

pub const INFRA_DETECTORS: &[Detector] = &[
    Detector::new("docker", "Docker").markers(&[
        "Dockerfile",
        "docker-compose.yml",
        "docker-compose.yaml",
    ]),
    Detector::new("kubernetes", "Kubernetes").markers(&["k8s/", "helm/", "*.k8s.yml"]),
    Detector::new("terraform", "Terraform").markers(&["terraform/", "*.tf"]),
    Detector::new("bicep", "Bicep").markers(&["bicep/", "*.bicep"]),
    Detector::new("pulumi", "Pulumi").markers(&["Pulumi.yaml"]),
    Detector::new("github-actions", "GitHub Actions").markers(&[".github/workflows/"]),
];

pub const CI_DETECTORS: &[Detector] = &[
    Detector::new("github-actions", "GitHub Actions").markers(&[".github/workflows/"]),
    Detector::new("azure-devops", "Azure DevOps").markers(&["azure-pipelines.yml"]),
    Detector::new("gitlab-ci", "GitLab CI").markers(&[".gitlab-ci.yml"]),
    Detector::new("circleci", "CircleCI").markers(&[".circleci/config.yml"]),
    Detector::new("jenkins", "Jenkins").markers(&["Jenkinsfile"]),
];
