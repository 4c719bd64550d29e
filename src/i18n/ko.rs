use super::Strings;

pub(crate) static STRINGS: Strings = Strings {
    discovered_initialized: "초기화된 노드를 발견했습니다: '{address}'\n",
    discovered_uninitialized: "초기화되지 않은 노드를 발견했습니다: '{address}'\n",
    discovered_multiple: "서비스 이름 '{service}' 아래에서 초기화되지 않은 노드를 둘 이상 발견했습니다\n",
    set_env_hint: "발견한 노드를 사용하려면 다음 환경 변수를 설정하세요:\n",
    ambiguous_hint: "클러스터를 초기화하려면 다음 중 *하나만* 설정한 뒤 init을 다시 실행하세요:",
    unseal_key: "언실 키 {index}: {value}",
    recovery_key: "복구 키 {index}: {value}",
    root_token: "초기 루트 토큰: {value}",
    init_summary_threshold: "\n노드가 키 {shares}개, 임계값 {threshold}(으)로 초기화되었습니다.\n위 키를 안전하게 배포하세요. 노드가 다시 봉인되거나 재시작 또는 중지되면\n언실하기 위해 이 키 중 최소 {threshold}개가 필요합니다.\n\n루트 키는 저장되지 않습니다. 키가 최소 {threshold}개 없으면\n노드는 영구적으로 봉인된 상태로 남습니다.",
    init_summary_stored: "\n노드가 성공적으로 초기화되었습니다.",
    init_summary_recovery: "\n복구 키가 키 {shares}개, 임계값 {threshold}(으)로 초기화되었습니다.\n위 키를 안전하게 배포하세요.",
    check_initialized: "노드가 초기화되어 있습니다",
    check_not_initialized: "노드가 초기화되지 않았습니다",
    error_load_config: "설정을 불러오지 못했습니다",
    error_invalid_request: "초기화 매개변수가 올바르지 않습니다",
    error_client_create_failed: "HTTP 클라이언트를 생성하지 못했습니다",
    error_not_found: "서비스 이름 '{service}' 아래에서 노드를 찾지 못했습니다",
    error_discovery_failed: "서비스 이름 '{service}' 조회에 실패했습니다",
    error_check_failed: "초기화 상태 확인 중 오류가 발생했습니다",
    error_init_failed: "노드 초기화 중 오류가 발생했습니다",
    error_key_count_mismatch: "노드는 이미 초기화되었습니다. 다른 작업을 하기 전에 위 키를 기록하세요.",
};
