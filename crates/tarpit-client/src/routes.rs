//! Console route table and segment-path handling.
//!
//! Every resource list shares one addressing shape: a base path plus a
//! `/:offset/:limit` paging window. This module is the only place that knows
//! that shape, on both the console side (list and segment paths the views
//! navigate to) and the API side (the endpoint stems the backend exposes).

use crate::error::{ApiError, Result};
use crate::protocol::constants::{DEFAULT_LIMIT, DEFAULT_OFFSET};

/// The independently paginated and routed entity categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Content,
    Rules,
    Apps,
    Downloads,
    Events,
    Requests,
    Honeypot,
    Query,
    Yara,
    Tag,
    RuleGroups,
}

/// Which mutation endpoint a resource exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    /// `/upsert`: inserts on id 0, updates otherwise.
    Upsert,
    /// `/update`: only accepts existing rows.
    Update,
}

impl WriteOp {
    fn path_part(self) -> &'static str {
        match self {
            WriteOp::Upsert => "upsert",
            WriteOp::Update => "update",
        }
    }
}

/// A paging window over one resource list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSegment {
    pub kind: ResourceKind,
    pub offset: i64,
    pub limit: i64,
}

struct RouteSpec {
    kind: ResourceKind,
    list_path: &'static str,
    segment_template: &'static str,
    route_name: Option<&'static str>,
    api_stem: &'static str,
    write_op: Option<WriteOp>,
    deletable: bool,
}

static ROUTES: [RouteSpec; 11] = [
    RouteSpec {
        kind: ResourceKind::Content,
        list_path: "/content",
        segment_template: "/content/:offset/:limit",
        route_name: None,
        api_stem: "content",
        write_op: Some(WriteOp::Upsert),
        deletable: true,
    },
    RouteSpec {
        kind: ResourceKind::Rules,
        list_path: "/rules",
        segment_template: "/rules/:offset/:limit",
        route_name: None,
        api_stem: "contentrule",
        write_op: Some(WriteOp::Upsert),
        deletable: true,
    },
    RouteSpec {
        kind: ResourceKind::Apps,
        list_path: "/apps",
        segment_template: "/apps/:offset/:limit",
        route_name: None,
        api_stem: "app",
        write_op: Some(WriteOp::Upsert),
        deletable: true,
    },
    RouteSpec {
        kind: ResourceKind::Downloads,
        list_path: "/downloads",
        segment_template: "/downloads/:offset/:limit",
        route_name: None,
        api_stem: "downloads",
        write_op: Some(WriteOp::Update),
        deletable: false,
    },
    RouteSpec {
        kind: ResourceKind::Events,
        list_path: "/events",
        segment_template: "/events/:offset/:limit",
        route_name: None,
        api_stem: "events",
        write_op: None,
        deletable: false,
    },
    RouteSpec {
        kind: ResourceKind::Requests,
        list_path: "/requests",
        segment_template: "/requests/:offset/:limit",
        // The request list is the one view other panels jump back to.
        route_name: Some("reqSegmentLink"),
        api_stem: "request",
        write_op: Some(WriteOp::Update),
        deletable: false,
    },
    RouteSpec {
        kind: ResourceKind::Honeypot,
        list_path: "/honeypot",
        segment_template: "/honeypot/:offset/:limit",
        route_name: None,
        api_stem: "honeypot",
        write_op: Some(WriteOp::Update),
        deletable: false,
    },
    RouteSpec {
        kind: ResourceKind::Query,
        list_path: "/query",
        segment_template: "/query/:offset/:limit",
        route_name: None,
        api_stem: "storedquery",
        write_op: Some(WriteOp::Upsert),
        deletable: true,
    },
    RouteSpec {
        kind: ResourceKind::Yara,
        list_path: "/yara",
        segment_template: "/yara/:offset/:limit",
        route_name: None,
        api_stem: "yara",
        write_op: None,
        deletable: false,
    },
    RouteSpec {
        kind: ResourceKind::Tag,
        list_path: "/tag",
        segment_template: "/tag/:offset/:limit",
        route_name: None,
        api_stem: "tag",
        write_op: Some(WriteOp::Upsert),
        deletable: true,
    },
    RouteSpec {
        kind: ResourceKind::RuleGroups,
        list_path: "/ruleGroups",
        segment_template: "/ruleGroups/:offset/:limit",
        route_name: None,
        api_stem: "rulegroup",
        write_op: Some(WriteOp::Upsert),
        deletable: true,
    },
];

impl ResourceKind {
    pub const ALL: [ResourceKind; 11] = [
        ResourceKind::Content,
        ResourceKind::Rules,
        ResourceKind::Apps,
        ResourceKind::Downloads,
        ResourceKind::Events,
        ResourceKind::Requests,
        ResourceKind::Honeypot,
        ResourceKind::Query,
        ResourceKind::Yara,
        ResourceKind::Tag,
        ResourceKind::RuleGroups,
    ];

    /// The console name of the resource, as used in paths.
    pub fn name(self) -> &'static str {
        spec_for(self).list_path.trim_start_matches('/')
    }

    pub fn from_name(name: &str) -> Option<ResourceKind> {
        ROUTES
            .iter()
            .find(|spec| spec.list_path.trim_start_matches('/') == name)
            .map(|spec| spec.kind)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn spec_for(kind: ResourceKind) -> &'static RouteSpec {
    // ROUTES covers every variant; the lookup cannot miss.
    ROUTES
        .iter()
        .find(|spec| spec.kind == kind)
        .unwrap_or(&ROUTES[0])
}

impl ResourceSegment {
    /// A validated paging window. Negative offsets and non-positive limits
    /// are rejected with `InvalidSegment`.
    pub fn new(kind: ResourceKind, offset: i64, limit: i64) -> Result<Self> {
        if offset < 0 {
            return Err(ApiError::InvalidSegment(format!(
                "offset {offset} is negative"
            )));
        }
        if limit <= 0 {
            return Err(ApiError::InvalidSegment(format!(
                "limit {limit} is not positive"
            )));
        }
        Ok(ResourceSegment {
            kind,
            offset,
            limit,
        })
    }

    /// The first page of `kind` with the standard page size.
    pub fn first_page(kind: ResourceKind) -> Self {
        ResourceSegment {
            kind,
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }

    /// The console path addressing this window.
    pub fn path(&self) -> String {
        spec_for(self.kind)
            .segment_template
            .replace(":offset", &self.offset.to_string())
            .replace(":limit", &self.limit.to_string())
    }
}

/// Base list path for a resource.
pub fn path_for(kind: ResourceKind) -> &'static str {
    spec_for(kind).list_path
}

/// Canonical route name, for back-navigation by name. Only the request
/// list carries one.
pub fn route_name_for(kind: ResourceKind) -> Option<&'static str> {
    spec_for(kind).route_name
}

/// Concrete segment path for a paging window; rejects invalid windows.
pub fn segment_path_for(kind: ResourceKind, offset: i64, limit: i64) -> Result<String> {
    Ok(ResourceSegment::new(kind, offset, limit)?.path())
}

/// Parses a console path against the route table.
///
/// Returns `Ok(None)` when the path matches no segment template (including
/// bare list paths), and `InvalidSegment` when a template matches but the
/// offset or limit is not a valid window value.
pub fn parse_segment(path: &str) -> Result<Option<ResourceSegment>> {
    for spec in &ROUTES {
        let Some(rest) = path.strip_prefix(spec.list_path) else {
            continue;
        };
        let Some(rest) = rest.strip_prefix('/') else {
            continue;
        };
        let mut parts = rest.split('/');
        let (Some(offset_raw), Some(limit_raw), None) = (parts.next(), parts.next(), parts.next())
        else {
            continue;
        };

        let offset: i64 = offset_raw.parse().map_err(|_| {
            ApiError::InvalidSegment(format!("offset {offset_raw:?} in {path:?} is not a number"))
        })?;
        let limit: i64 = limit_raw.parse().map_err(|_| {
            ApiError::InvalidSegment(format!("limit {limit_raw:?} in {path:?} is not a number"))
        })?;

        return ResourceSegment::new(spec.kind, offset, limit).map(Some);
    }
    Ok(None)
}

/// API endpoint serving paginated search results for a resource.
pub fn segment_endpoint(kind: ResourceKind) -> String {
    format!("/{}/segment", spec_for(kind).api_stem)
}

/// API endpoint accepting model writes, where the resource has one.
pub fn write_endpoint(kind: ResourceKind) -> Result<String> {
    let spec = spec_for(kind);
    match spec.write_op {
        Some(op) => Ok(format!("/{}/{}", spec.api_stem, op.path_part())),
        None => Err(ApiError::UnsupportedOperation {
            kind: kind.name(),
            operation: "write",
        }),
    }
}

/// API endpoint accepting deletions, where the resource has one.
pub fn delete_endpoint(kind: ResourceKind) -> Result<String> {
    let spec = spec_for(kind);
    if spec.deletable {
        Ok(format!("/{}/delete", spec.api_stem))
    } else {
        Err(ApiError::UnsupportedOperation {
            kind: kind.name(),
            operation: "delete",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_round_trip_all_kinds() {
        for kind in ResourceKind::ALL {
            let path = segment_path_for(kind, 48, 24).unwrap();
            let parsed = parse_segment(&path).unwrap().unwrap();
            assert_eq!(parsed.kind, kind);
            assert_eq!(parsed.offset, 48);
            assert_eq!(parsed.limit, 24);
        }
    }

    #[test]
    fn test_segment_path_rejects_negative_offset() {
        assert!(matches!(
            segment_path_for(ResourceKind::Content, -1, 24),
            Err(ApiError::InvalidSegment(_))
        ));
    }

    #[test]
    fn test_segment_path_rejects_non_positive_limit() {
        assert!(matches!(
            segment_path_for(ResourceKind::Content, 0, 0),
            Err(ApiError::InvalidSegment(_))
        ));
        assert!(matches!(
            segment_path_for(ResourceKind::Content, 0, -5),
            Err(ApiError::InvalidSegment(_))
        ));
    }

    #[test]
    fn test_parse_unknown_path_is_absent() {
        assert!(parse_segment("/stats").unwrap().is_none());
        assert!(parse_segment("/content").unwrap().is_none());
        assert!(parse_segment("/content/5").unwrap().is_none());
        assert!(parse_segment("/content/5/10/15").unwrap().is_none());
    }

    #[test]
    fn test_parse_non_numeric_segment_is_an_error() {
        assert!(matches!(
            parse_segment("/requests/ten/24"),
            Err(ApiError::InvalidSegment(_))
        ));
        assert!(matches!(
            parse_segment("/requests/0/everything"),
            Err(ApiError::InvalidSegment(_))
        ));
    }

    #[test]
    fn test_parse_out_of_range_segment_is_an_error() {
        assert!(matches!(
            parse_segment("/requests/-8/24"),
            Err(ApiError::InvalidSegment(_))
        ));
        assert!(matches!(
            parse_segment("/requests/0/0"),
            Err(ApiError::InvalidSegment(_))
        ));
    }

    #[test]
    fn test_only_requests_has_a_route_name() {
        for kind in ResourceKind::ALL {
            match kind {
                ResourceKind::Requests => {
                    assert_eq!(route_name_for(kind), Some("reqSegmentLink"))
                }
                _ => assert!(route_name_for(kind).is_none()),
            }
        }
    }

    #[test]
    fn test_api_endpoints_follow_backend_naming() {
        assert_eq!(segment_endpoint(ResourceKind::Rules), "/contentrule/segment");
        assert_eq!(segment_endpoint(ResourceKind::Query), "/storedquery/segment");
        assert_eq!(
            write_endpoint(ResourceKind::Downloads).unwrap(),
            "/downloads/update"
        );
        assert_eq!(write_endpoint(ResourceKind::Tag).unwrap(), "/tag/upsert");
        assert_eq!(
            delete_endpoint(ResourceKind::Apps).unwrap(),
            "/app/delete"
        );
    }

    #[test]
    fn test_read_only_kinds_reject_writes() {
        assert!(matches!(
            write_endpoint(ResourceKind::Yara),
            Err(ApiError::UnsupportedOperation { .. })
        ));
        assert!(matches!(
            delete_endpoint(ResourceKind::Events),
            Err(ApiError::UnsupportedOperation { .. })
        ));
        assert!(matches!(
            delete_endpoint(ResourceKind::Requests),
            Err(ApiError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in ResourceKind::ALL {
            assert_eq!(ResourceKind::from_name(kind.name()), Some(kind));
        }
        assert!(ResourceKind::from_name("nonsense").is_none());
    }

    #[test]
    fn test_first_page_uses_defaults() {
        let seg = ResourceSegment::first_page(ResourceKind::Events);
        assert_eq!(seg.offset, 0);
        assert_eq!(seg.limit, 24);
        assert_eq!(seg.path(), "/events/0/24");
    }
}
