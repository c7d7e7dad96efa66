//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 부팅 과정(저장소 연결, 서비스 조립, 라우트 등록)을 터미널에 단계별로 출력합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// 텍스트는 49칸 안에서 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║               Shop Service Started               ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(50);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 부팅 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Connecting data store
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 부팅 단계 완료를 처리된 항목 수와 함께 표시합니다
///
/// ```text
/// ✓ Step 2: Services registered (6 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 하위 작업의 상태를 트리 형태로 표시합니다
///
/// ```text
///    ├─ Store: MongoDB (shop_dev)
///    ├─ Events: Redis (shop.events)
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 부팅 완료 요약
///
/// # Arguments
///
/// * `store` - 선택된 저장소 백엔드 이름
/// * `services` - 레지스트리에 등록된 서비스 수
/// * `address` - 바인딩 주소
pub fn print_boot_summary(store: &str, services: usize, address: &str) {
    println!();
    print_boxed_title("🎉 SHOP SERVICE READY");
    println!("   🗄️  Store: {}", store);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Listening: http://{}", address);
    println!();
}
