//! Simple printer tests, driven through the `Response` set the CLI renders.

mod common;

use common::{
    assert_bytes_eq, capture, capture_all, capture_default, event, mixed_permissions, range_of,
    test_header,
};
use latticectl::etcd::{
    AlarmMember, AlarmResponse, AlarmType, AuthOpResponse, DeleteRangeResponse, DowngradeAction,
    DowngradeResponse, EndpointHashKv, EndpointHealth, EndpointStatus, EventType, HashKvResponse,
    KeyValue, LeaseLeasesResponse, LeaseStatus, LeaseTimeToLiveResponse, Member, MemberListResponse,
    PutResponse, ResponseOp, RoleGetResponse, RoleListResponse, StatusResponse, TxnResponse,
    UserGetResponse, UserListResponse, WatchResponse, EXPIRED_TTL, OPEN_ENDED,
};
use latticectl::printer::{FormatterConfig, Response};
use std::time::Duration;

// ============================================================================
// KV
// ============================================================================

#[test]
fn get_prints_pairs_in_order() {
    let out = capture_default(&Response::Get(range_of(&[("a", "1"), ("b", "2"), ("c", "3")])));
    assert_eq!(out.stdout_str(), "a\n1\nb\n2\nc\n3\n");
    assert!(out.stderr.is_empty());
}

#[test]
fn get_value_only_and_hex() {
    let resp = Response::Get(range_of(&[("foo", "bar")]));

    let out = capture(FormatterConfig::default().value_only(true), &resp);
    assert_eq!(out.stdout_str(), "bar\n");

    let out = capture(FormatterConfig::default().hex(true), &resp);
    assert_eq!(out.stdout_str(), "666f6f\n626172\n");
}

#[test]
fn get_raw_control_bytes_pass_through() {
    let resp = Response::Get(latticectl::etcd::RangeResponse {
        kvs: vec![KeyValue::new(vec![b'k', 0x07], vec![0x00, b'\n'])],
        ..Default::default()
    });
    let out = capture_default(&resp);
    assert_bytes_eq(&[b'k', 0x07, b'\n', 0x00, b'\n', b'\n'], &out.stdout);
}

#[test]
fn delete_and_put_with_previous_values() {
    let out = capture_all(
        FormatterConfig::default(),
        &[
            Response::Delete(DeleteRangeResponse {
                header: test_header(),
                deleted: 1,
                prev_kvs: vec![KeyValue::new("k", "old")],
            }),
            Response::Put(PutResponse {
                header: test_header(),
                prev_kv: Some(KeyValue::new("k", "older")),
            }),
        ],
    );
    assert_eq!(out.stdout_str(), "1\nk\nold\nOK\nk\nolder\n");
}

#[test]
fn watch_prints_type_then_prev_then_current() {
    let mut update = event(EventType::Put, "k", "new");
    update.prev_kv = Some(KeyValue::new("k", "old"));
    let resp = Response::Watch(WatchResponse {
        header: test_header(),
        watch_id: 1,
        events: vec![update, event(EventType::Delete, "gone", "")],
    });

    let out = capture_default(&resp);
    assert_eq!(out.stdout_str(), "PUT\nk\nold\nk\nnew\nDELETE\ngone\n\n");
}

#[test]
fn watch_honours_value_only_and_hex() {
    let mut update = event(EventType::Put, "k", "new");
    update.prev_kv = Some(KeyValue::new("k", "old"));
    let resp = Response::Watch(WatchResponse {
        header: test_header(),
        watch_id: 1,
        events: vec![update],
    });

    let out = capture(FormatterConfig::default().value_only(true), &resp);
    assert_eq!(out.stdout_str(), "PUT\nold\nnew\n");

    let out = capture(FormatterConfig::default().hex(true), &resp);
    assert_eq!(out.stdout_str(), "PUT\n6b\n6f6c64\n6b\n6e6577\n");
}

#[test]
fn put_prev_kv_honours_value_only_and_hex() {
    let resp = Response::Put(PutResponse {
        header: test_header(),
        prev_kv: Some(KeyValue::new("k", "older")),
    });

    let out = capture(FormatterConfig::default().value_only(true), &resp);
    assert_eq!(out.stdout_str(), "OK\nolder\n");

    let out = capture(FormatterConfig::default().hex(true), &resp);
    assert_eq!(out.stdout_str(), "OK\n6b\n6f6c646572\n");
}

// ============================================================================
// Transactions
// ============================================================================

#[test]
fn txn_sub_results_follow_submission_order() {
    let resp = Response::Txn(TxnResponse::new(
        test_header(),
        true,
        vec![
            ResponseOp::Range(range_of(&[("x", "1")])),
            ResponseOp::Put(PutResponse::default()),
            ResponseOp::DeleteRange(DeleteRangeResponse {
                deleted: 0,
                ..Default::default()
            }),
        ],
    ));
    let out = capture_default(&resp);
    assert_eq!(out.stdout_str(), "SUCCESS\n\nx\n1\n\nOK\n\n0\n");
}

#[test]
fn txn_unrecognized_op_does_not_stop_the_rest() {
    let resp = Response::Txn(TxnResponse::new(
        test_header(),
        false,
        vec![
            ResponseOp::Put(PutResponse::default()),
            ResponseOp::Txn(TxnResponse::default()),
            ResponseOp::Range(range_of(&[("after", "v")])),
        ],
    ));
    let out = capture_default(&resp);
    let text = out.stdout_str();
    assert!(text.starts_with("FAILURE\n\nOK\n\nunexpected response "));
    assert!(text.ends_with("\n\nafter\nv\n"));
    assert!(out.stderr.is_empty());
}

#[test]
fn txn_sub_results_share_the_formatter_settings() {
    let resp = Response::Txn(TxnResponse::new(
        test_header(),
        true,
        vec![
            ResponseOp::Put(PutResponse {
                prev_kv: Some(KeyValue::new("k", "a")),
                ..Default::default()
            }),
            ResponseOp::Range(range_of(&[("k", "v")])),
        ],
    ));

    let out = capture(FormatterConfig::default().value_only(true), &resp);
    assert_eq!(out.stdout_str(), "SUCCESS\n\nOK\na\n\nv\n");

    let out = capture(FormatterConfig::default().hex(true).value_only(true), &resp);
    assert_eq!(out.stdout_str(), "SUCCESS\n\nOK\n61\n\n76\n");

    let out = capture(FormatterConfig::default().hex(true), &resp);
    assert_eq!(out.stdout_str(), "SUCCESS\n\nOK\n6b\n61\n\n6b\n76\n");
}

// ============================================================================
// Leases
// ============================================================================

#[test]
fn lease_ttl_expired_never_prints_ttl() {
    let resp = Response::LeaseTimeToLive {
        resp: LeaseTimeToLiveResponse {
            id: 0x34,
            ttl: EXPIRED_TTL,
            granted_ttl: 0,
            ..Default::default()
        },
        keys: true,
    };
    let out = capture_default(&resp);
    assert_eq!(out.stdout_str(), "lease 0000000000000034 already expired\n");
    assert!(!out.stdout_str().contains("TTL("));
}

#[test]
fn lease_ttl_zero_remaining_is_not_expired() {
    let resp = Response::LeaseTimeToLive {
        resp: LeaseTimeToLiveResponse {
            id: 0x34,
            ttl: 0,
            granted_ttl: 0,
            ..Default::default()
        },
        keys: false,
    };
    let out = capture_default(&resp);
    assert_eq!(
        out.stdout_str(),
        "lease 0000000000000034 granted with TTL(0s), remaining(0s)\n"
    );
}

#[test]
fn lease_ttl_keys_stay_raw_under_hex() {
    let resp = Response::LeaseTimeToLive {
        resp: LeaseTimeToLiveResponse {
            id: 1,
            ttl: 10,
            granted_ttl: 60,
            keys: vec![b"a".to_vec()],
            ..Default::default()
        },
        keys: true,
    };
    let out = capture(FormatterConfig::default().hex(true), &resp);
    assert_eq!(
        out.stdout_str(),
        "lease 0000000000000001 granted with TTL(60s), remaining(10s), attached keys([a])\n"
    );
}

// ============================================================================
// Cluster and maintenance
// ============================================================================

#[test]
fn alarms_one_line_each() {
    let resp = Response::Alarm(AlarmResponse {
        header: test_header(),
        alarms: vec![
            AlarmMember {
                member_id: 1,
                alarm: AlarmType::Nospace,
            },
            AlarmMember {
                member_id: 2,
                alarm: AlarmType::Corrupt,
            },
        ],
    });
    let out = capture_default(&resp);
    assert_eq!(
        out.stdout_str(),
        "memberID:1 alarm:NOSPACE\nmemberID:2 alarm:CORRUPT\n"
    );
}

#[test]
fn health_batch_splits_per_endpoint() {
    let resp = Response::EndpointHealth(vec![
        EndpointHealth::healthy("https://a:2379", Duration::from_micros(1500)),
        EndpointHealth::unhealthy("https://b:2379", Duration::ZERO, "connection refused"),
        EndpointHealth::healthy("https://c:2379", Duration::from_millis(4)),
    ]);
    let out = capture_default(&resp);
    assert_eq!(
        out.stdout_str(),
        "https://a:2379 is healthy: successfully committed proposal: took = 1.5ms\n\
         https://c:2379 is healthy: successfully committed proposal: took = 4ms\n"
    );
    assert_eq!(
        out.stderr_str(),
        "https://b:2379 is unhealthy: failed to commit proposal: connection refused\n"
    );
}

#[test]
fn member_and_endpoint_listings_are_comma_joined() {
    let out = capture_all(
        FormatterConfig::default(),
        &[
            Response::MemberList(MemberListResponse {
                header: test_header(),
                members: vec![Member {
                    id: 0xff,
                    name: "n1".to_string(),
                    peer_urls: vec!["http://p:2380".to_string()],
                    client_urls: vec!["http://c:2379".to_string()],
                    is_learner: false,
                }],
            }),
            Response::EndpointStatus(vec![EndpointStatus {
                ep: "c:2379".to_string(),
                resp: StatusResponse {
                    header: test_header(),
                    version: "3.5.0".to_string(),
                    db_size: 2_400_000,
                    leader: 1,
                    raft_term: 3,
                    raft_index: 9,
                    raft_applied_index: 9,
                    errors: vec!["e1".to_string(), "e2".to_string()],
                    ..Default::default()
                },
            }]),
            Response::EndpointHashKv(vec![EndpointHashKv {
                ep: "c:2379".to_string(),
                resp: HashKvResponse {
                    hash: 7,
                    hash_revision: 5,
                    compact_revision: 1,
                    ..Default::default()
                },
            }]),
        ],
    );
    assert_eq!(
        out.stdout_str(),
        "ff, started, n1, http://p:2380, http://c:2379, false\n\
         c:2379, 8e9e05c52164694d, 3.5.0, 2.4 MB, false, false, 3, 9, 9, e1, e2\n\
         c:2379, 7, 5, 1\n"
    );
}

#[test]
fn leadership_and_downgrade() {
    let out = capture_all(
        FormatterConfig::default(),
        &[
            Response::MoveLeader {
                leader: 0xabc,
                target: 0xdef,
                resp: Default::default(),
            },
            Response::Downgrade {
                action: DowngradeAction::Enable,
                resp: DowngradeResponse {
                    header: test_header(),
                    version: "3.5".to_string(),
                },
            },
        ],
    );
    assert_eq!(
        out.stdout_str(),
        "Leadership transferred from abc to def\n\
         Downgrade enable success, cluster version 3.5\n"
    );
}

// ============================================================================
// Auth
// ============================================================================

#[test]
fn role_get_groups_read_and_write() {
    let resp = Response::RoleGet {
        role: "app".to_string(),
        resp: RoleGetResponse {
            header: test_header(),
            perm: mixed_permissions(),
        },
    };
    let out = capture_default(&resp);
    assert_eq!(
        out.stdout_str(),
        "Role app\n\
         KV Read:\n\
         \tconfig\n\
         \t[users/, users0) (prefix users/)\n\
         \t[z, <open ended>\n\
         KV Write:\n\
         \t[users/, users0) (prefix users/)\n\
         \t[a, m)\n"
    );
}

#[test]
fn revoke_permission_shapes() {
    let revoke = |key: &str, range_end: &[u8]| Response::RoleRevokePermission {
        role: "r".to_string(),
        key: key.as_bytes().to_vec(),
        range_end: range_end.to_vec(),
        resp: AuthOpResponse::default(),
    };
    let out = capture_all(
        FormatterConfig::default(),
        &[revoke("k", b""), revoke("a", b"b"), revoke("a", OPEN_ENDED)],
    );
    assert_eq!(
        out.stdout_str(),
        "Permission of key k is revoked from role r\n\
         Permission of range [a, b) is revoked from role r\n\
         Permission of range [a, <open ended> is revoked from role r\n"
    );
}

#[test]
fn user_and_role_confirmations() {
    let op = AuthOpResponse::default;
    let out = capture_all(
        FormatterConfig::default(),
        &[
            Response::RoleAdd {
                role: "r".to_string(),
                resp: op(),
            },
            Response::RoleGrantPermission {
                role: "r".to_string(),
                resp: op(),
            },
            Response::UserAdd {
                user: "u".to_string(),
                resp: op(),
            },
            Response::UserGrantRole {
                user: "u".to_string(),
                role: "r".to_string(),
                resp: op(),
            },
            Response::UserRevokeRole {
                user: "u".to_string(),
                role: "r".to_string(),
                resp: op(),
            },
            Response::UserChangePassword(op()),
            Response::UserDelete {
                user: "u".to_string(),
                resp: op(),
            },
            Response::RoleDelete {
                role: "r".to_string(),
                resp: op(),
            },
        ],
    );
    assert_eq!(
        out.stdout_str(),
        "Role r created\n\
         Role r updated\n\
         User u created\n\
         Role r is granted to user u\n\
         Role r is revoked from user u\n\
         Password updated\n\
         User u deleted\n\
         Role r deleted\n"
    );
}

#[test]
fn name_listings_one_per_line() {
    let out = capture_all(
        FormatterConfig::default(),
        &[
            Response::RoleList(RoleListResponse {
                roles: vec!["root".to_string(), "app".to_string()],
                ..Default::default()
            }),
            Response::UserList(UserListResponse {
                users: vec!["alice".to_string()],
                ..Default::default()
            }),
            Response::UserGet {
                user: "alice".to_string(),
                resp: UserGetResponse {
                    roles: vec!["app".to_string()],
                    ..Default::default()
                },
            },
            Response::LeaseList(LeaseLeasesResponse {
                leases: vec![LeaseStatus { id: 1 }],
                ..Default::default()
            }),
        ],
    );
    assert_eq!(
        out.stdout_str(),
        "root\napp\nalice\nUser: alice\nRoles: app\nfound 1 leases\n0000000000000001\n"
    );
}

// ============================================================================
// Whole documents
// ============================================================================

#[test]
fn documents_decode_and_print() {
    let resp = Response::from_json(
        r#"{
            "kind": "lease_time_to_live",
            "body": {
                "resp": {"id": 4096, "ttl": 5, "granted_ttl": 10, "keys": [[102, 111, 111]]},
                "keys": true
            }
        }"#,
    )
    .unwrap();
    let out = capture_default(&resp);
    assert_eq!(
        out.stdout_str(),
        "lease 0000000000001000 granted with TTL(10s), remaining(5s), attached keys([foo])\n"
    );
}

#[test]
fn printing_is_repeatable() {
    let responses = vec![
        Response::Get(range_of(&[("k", "v")])),
        Response::RoleGet {
            role: "root".to_string(),
            resp: RoleGetResponse::default(),
        },
        Response::EndpointHealth(vec![EndpointHealth::unhealthy("e", Duration::ZERO, "down")]),
    ];
    for config in [
        FormatterConfig::default(),
        FormatterConfig::default().hex(true).value_only(true),
    ] {
        let first = capture_all(config, &responses);
        let second = capture_all(config, &responses);
        assert_eq!(first.stdout, second.stdout);
        assert_eq!(first.stderr, second.stderr);
    }
}
